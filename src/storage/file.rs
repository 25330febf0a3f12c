use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
};

use crate::storage::{
    errors::StorageResult,
    page::{Page, PageId},
};

/// Identity of a backing file, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

static NEXT_FILE_ID: AtomicU32 = AtomicU32::new(1);

impl FileId {
    pub fn next() -> Self {
        FileId(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A file of fixed-size pages.
///
/// Methods take `&self`; implementations keep their own interior state so a
/// file can be shared between the buffer pool and its callers.
pub trait PageFile: Send + Sync {
    fn id(&self) -> FileId;

    fn name(&self) -> &str;

    fn read_page(&self, page_id: PageId) -> StorageResult<Page>;

    fn write_page(&self, page: &Page) -> StorageResult<()>;

    /// Appends a new zero-filled page and returns it.
    fn allocate_page(&self) -> StorageResult<Page>;

    fn delete_page(&self, page_id: PageId) -> StorageResult<()>;
}

pub type FileRef = Arc<dyn PageFile>;
