//! Fixed-size page cache with clock (second-chance) replacement.
//!
//! # Components
//!
//! - frame pool: `N` in-memory pages, allocated once
//! - [`FrameDescriptor`] table: owner, page id, valid/referenced/dirty bits, pin count
//! - [`PageDirectory`]: `(file, page id) -> frame`, in bijection with valid frames
//! - [`ClockCursor`]: the sweep position shared by every allocation
//! - [`BufferPoolManager`]: fetch, release, allocate, dispose, flush, inspect
//!
//! The manager does no locking. Callers serialize access or wrap it in a mutex.

pub mod clock;
pub mod directory;
pub mod errors;
pub mod frame;
pub mod handle;
pub mod inspect;
pub mod pool;


pub use clock::ClockCursor;
pub use directory::PageDirectory;
pub use errors::{BufferError, BufferResult};
pub use frame::{FrameDescriptor, FrameId};
pub use handle::PageHandle;
pub use inspect::{BufferSnapshot, BufferStats, FrameInfo};
pub use pool::BufferPoolManager;
