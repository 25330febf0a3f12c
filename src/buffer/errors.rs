//! Buffer pool errors.

use thiserror::Error;

use crate::{
    buffer::frame::FrameId,
    storage::{FileId, PageId, StorageError},
};

pub type BufferResult<T> = Result<T, BufferError>;

#[derive(Debug, Error)]
pub enum BufferError {
    /// Every frame was pinned during an allocation attempt.
    #[error("buffer pool exhausted: all {num_frames} frames are pinned")]
    PoolExhausted { num_frames: usize },

    /// Release called on a resident page with no outstanding pins.
    #[error("page {page_id} of file {file} in frame {frame} is not pinned")]
    NotPinned {
        file: FileId,
        page_id: PageId,
        frame: FrameId,
    },

    /// Flush hit a frame that is still in use.
    #[error("page {page_id} of file {file} in frame {frame} is still pinned")]
    FramePinned {
        file: FileId,
        page_id: PageId,
        frame: FrameId,
    },

    /// Descriptor state that the manager never produces.
    #[error("corrupt frame {frame}: valid={valid} dirty={dirty} referenced={referenced}")]
    CorruptFrame {
        frame: FrameId,
        valid: bool,
        dirty: bool,
        referenced: bool,
    },

    /// The handle outlived its pin, or the frame has since been reused.
    #[error("stale handle for page {page_id} in frame {frame}")]
    StaleHandle { frame: FrameId, page_id: PageId },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BufferError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Only exhaustion clears up on its own once pins are released.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PoolExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exhaustion_is_retryable() {
        assert!(BufferError::PoolExhausted { num_frames: 2 }.is_retryable());
        assert!(
            !BufferError::NotPinned {
                file: FileId(1),
                page_id: PageId(0),
                frame: FrameId(0),
            }
            .is_retryable()
        );
        assert!(!BufferError::config("bad").is_retryable());
    }

    #[test]
    fn messages_name_the_frame() {
        let err = BufferError::FramePinned {
            file: FileId(3),
            page_id: PageId(7),
            frame: FrameId(1),
        };
        assert_eq!(
            err.to_string(),
            "page 7 of file #3 in frame 1 is still pinned"
        );
    }
}
