use thiserror::Error;

use crate::storage::{file::FileId, page::PageId};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage error: page {page_id} not found in file {file}")]
    PageNotFound { file: FileId, page_id: PageId },

    #[error("storage error: page {page_id} has {len} bytes, expected {expected}")]
    BadPageSize {
        page_id: PageId,
        len: usize,
        expected: usize,
    },

    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
