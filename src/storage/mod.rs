//! Backing files for the buffer pool.
//!
//! The buffer pool only ever talks to a [`PageFile`]: read a page, write a
//! page back, allocate a fresh page, delete a page. Two implementations are
//! provided, [`DiskFile`] over a single OS file and [`MemoryFile`] held in a
//! hash map.

pub mod disk;
pub mod errors;
pub mod file;
pub mod in_memory;
pub mod page;


pub use disk::DiskFile;
pub use errors::{StorageError, StorageResult};
pub use file::{FileId, FileRef, PageFile};
pub use in_memory::MemoryFile;
pub use page::{PAGE_SIZE, Page, PageId};
