use std::{fmt, sync::Arc};

use crate::storage::{FileId, FileRef, PageId};

/// Index of a frame in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bookkeeping for one frame.
///
/// A free frame (`valid == false`) has no owner, no pins, and clear
/// referenced and dirty bits. `generation` changes every time the frame is
/// cleared or installed so handles into an older occupant can be detected.
pub struct FrameDescriptor {
    pub(crate) owner: Option<FileRef>,
    pub(crate) page_id: PageId,
    pub(crate) valid: bool,
    pub(crate) referenced: bool,
    pub(crate) dirty: bool,
    pub(crate) pin_count: u32,
    pub(crate) generation: u64,
}

impl FrameDescriptor {
    pub fn new() -> Self {
        Self {
            owner: None,
            page_id: PageId::default(),
            valid: false,
            referenced: false,
            dirty: false,
            pin_count: 0,
            generation: 0,
        }
    }

    pub fn owner_id(&self) -> Option<FileId> {
        self.owner.as_ref().map(|file| file.id())
    }

    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the frame to the free state.
    pub(crate) fn clear(&mut self) {
        self.owner = None;
        self.page_id = PageId::default();
        self.valid = false;
        self.referenced = false;
        self.dirty = false;
        self.pin_count = 0;
        self.generation += 1;
    }

    /// Marks the frame as holding `page_id` of `file`, pinned once.
    pub(crate) fn set(&mut self, file: &FileRef, page_id: PageId) {
        self.owner = Some(Arc::clone(file));
        self.page_id = page_id;
        self.valid = true;
        self.referenced = true;
        self.dirty = false;
        self.pin_count = 1;
        self.generation += 1;
    }
}

impl Default for FrameDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDescriptor")
            .field("owner", &self.owner_id())
            .field("page_id", &self.page_id)
            .field("valid", &self.valid)
            .field("referenced", &self.referenced)
            .field("dirty", &self.dirty)
            .field("pin_count", &self.pin_count)
            .field("generation", &self.generation)
            .finish()
    }
}
