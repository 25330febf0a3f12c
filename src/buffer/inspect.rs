use std::fmt;

use crate::{
    buffer::frame::{FrameDescriptor, FrameId},
    storage::{FileId, PageId},
};

/// Counters kept by the manager since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub write_backs: u64,
}

/// Copy of one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInfo {
    pub frame: FrameId,
    pub owner: Option<FileId>,
    pub page_id: PageId,
    pub valid: bool,
    pub referenced: bool,
    pub dirty: bool,
    pub pin_count: u32,
}

impl FrameInfo {
    pub(crate) fn from_descriptor(frame: FrameId, desc: &FrameDescriptor) -> Self {
        Self {
            frame,
            owner: desc.owner_id(),
            page_id: desc.page_id(),
            valid: desc.is_valid(),
            referenced: desc.is_referenced(),
            dirty: desc.is_dirty(),
            pin_count: desc.pin_count(),
        }
    }
}

/// Read-only view of the pool produced by `inspect`.
#[derive(Debug, Clone)]
pub struct BufferSnapshot {
    pub frames: Vec<FrameInfo>,
    pub valid_frames: usize,
    pub directory_entries: usize,
    pub clock_hand: FrameId,
    pub stats: BufferStats,
}

impl BufferSnapshot {
    pub fn pinned_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.pin_count > 0).count()
    }

    pub fn dirty_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.dirty).count()
    }
}

impl fmt::Display for BufferSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in &self.frames {
            write!(f, "frame {}: ", info.frame)?;
            match info.owner {
                Some(owner) => write!(f, "file {} page {} ", owner, info.page_id)?,
                None => write!(f, "free ")?,
            }
            writeln!(
                f,
                "valid={} ref={} dirty={} pins={}",
                info.valid, info.referenced, info.dirty, info.pin_count
            )?;
        }
        writeln!(f, "total valid frames: {}", self.valid_frames)?;
        write!(
            f,
            "hits={} misses={} evictions={} write_backs={}",
            self.stats.hits, self.stats.misses, self.stats.evictions, self.stats.write_backs
        )
    }
}
