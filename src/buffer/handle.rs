use crate::{
    buffer::frame::FrameId,
    storage::{FileId, PageId},
};

/// Token for a pinned page, returned by fetch and allocate.
///
/// The handle does not borrow the manager. Page bytes are reached through
/// [`BufferPoolManager::page`](crate::buffer::BufferPoolManager::page) and
/// friends, which refuse the handle once the frame has been unpinned to zero,
/// evicted, flushed or disposed. Not `Clone`: one handle per pin.
#[derive(Debug, PartialEq, Eq)]
pub struct PageHandle {
    frame: FrameId,
    generation: u64,
    file: FileId,
    page_id: PageId,
}

impl PageHandle {
    pub(crate) fn new(frame: FrameId, generation: u64, file: FileId, page_id: PageId) -> Self {
        Self {
            frame,
            generation,
            file,
            page_id,
        }
    }

    pub fn frame_id(&self) -> FrameId {
        self.frame
    }

    pub fn file_id(&self) -> FileId {
        self.file
    }

    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}
