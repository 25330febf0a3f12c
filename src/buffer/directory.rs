use std::collections::HashMap;

use crate::{
    buffer::frame::FrameId,
    storage::{FileId, PageId},
};

/// Hash index from `(file, page id)` to the frame holding that page.
///
/// A miss is `None`, the ordinary outcome for a page's first access.
#[derive(Debug, Default)]
pub struct PageDirectory {
    table: HashMap<(FileId, PageId), FrameId>,
}

impl PageDirectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the frame previously mapped to this key, if any.
    pub fn insert(&mut self, file: FileId, page_id: PageId, frame: FrameId) -> Option<FrameId> {
        self.table.insert((file, page_id), frame)
    }

    pub fn remove(&mut self, file: FileId, page_id: PageId) -> Option<FrameId> {
        self.table.remove(&(file, page_id))
    }

    pub fn lookup(&self, file: FileId, page_id: PageId) -> Option<FrameId> {
        self.table.get(&(file, page_id)).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FileId, PageId, FrameId)> + '_ {
        self.table
            .iter()
            .map(|(&(file, page_id), &frame)| (file, page_id, frame))
    }
}
