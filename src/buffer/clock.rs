//! Clock (second-chance) sweep.
//!
//! The cursor advances one frame per consideration step and keeps its
//! position between allocations. What happens at each frame is decided by
//! [`ClockCursor::visit`]; the manager carries out the decision.

use crate::buffer::frame::{FrameDescriptor, FrameId};

/// Outcome of looking at one frame during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Not holding a page, claim it as is.
    Free,
    /// Recently referenced: clear the bit and move on.
    SecondChance,
    /// In use, counts toward exhaustion.
    Pinned,
    /// Valid, unreferenced and unpinned: evict and claim.
    Victim,
}

#[derive(Debug, Clone)]
pub struct ClockCursor {
    hand: usize,
    num_frames: usize,
}

impl ClockCursor {
    /// Starts on the last frame so the first step lands on frame 0.
    pub fn new(num_frames: usize) -> Self {
        Self {
            hand: num_frames.saturating_sub(1),
            num_frames,
        }
    }

    pub fn advance(&mut self) -> FrameId {
        self.hand = (self.hand + 1) % self.num_frames;
        FrameId(self.hand)
    }

    pub fn position(&self) -> FrameId {
        FrameId(self.hand)
    }

    pub fn visit(desc: &FrameDescriptor) -> Visit {
        if !desc.valid {
            Visit::Free
        } else if desc.referenced {
            Visit::SecondChance
        } else if desc.pin_count > 0 {
            Visit::Pinned
        } else {
            Visit::Victim
        }
    }
}
