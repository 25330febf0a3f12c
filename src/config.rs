/// Number of frames used when no explicit size is configured.
pub const DEFAULT_NUM_FRAMES: usize = 64;

/// Configuration for the buffer pool.
#[derive(Debug, Clone)]
pub struct BufferPoolConfig {
    /// Number of frames in the pool. Fixed for the lifetime of the manager.
    pub num_frames: usize,
    /// Write back every dirty frame when the manager is dropped.
    pub flush_on_drop: bool,
}

impl BufferPoolConfig {
    pub fn new(num_frames: usize) -> Self {
        Self {
            num_frames,
            flush_on_drop: true,
        }
    }

    pub fn with_flush_on_drop(mut self, enabled: bool) -> Self {
        self.flush_on_drop = enabled;
        self
    }

    /// Bucket hint for the page directory: 1.2 * N + 1.
    pub fn directory_capacity(&self) -> usize {
        self.num_frames * 6 / 5 + 1
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.num_frames == 0 {
            return Err("num_frames must be > 0");
        }
        Ok(())
    }
}

impl Default for BufferPoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_FRAMES)
    }
}
