pub mod config;

pub mod buffer;
pub mod debugger;
pub mod storage;

pub use buffer::{BufferError, BufferPoolManager, BufferResult, PageHandle};
pub use config::BufferPoolConfig;
pub use storage::{DiskFile, FileId, FileRef, MemoryFile, Page, PageFile, PageId, PAGE_SIZE};

#[doc(hidden)]
pub use tracing;
