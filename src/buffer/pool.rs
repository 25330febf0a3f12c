use crate::{
    buffer::{
        clock::{ClockCursor, Visit},
        directory::PageDirectory,
        errors::{BufferError, BufferResult},
        frame::{FrameDescriptor, FrameId},
        handle::PageHandle,
        inspect::{BufferSnapshot, BufferStats, FrameInfo},
    },
    config::BufferPoolConfig,
    db_debug, db_error, db_trace, db_warn,
    storage::{FileId, FileRef, Page, PageId},
};

/// The buffer pool manager.
///
/// Serves pages of any number of [`PageFile`](crate::storage::PageFile)s out
/// of a fixed set of frames. A page stays resident while it is pinned; once
/// its pin count drops to zero it becomes a candidate for the clock sweep.
///
/// Dropping the manager writes back every dirty frame unless
/// [`BufferPoolConfig::flush_on_drop`] is off.
pub struct BufferPoolManager {
    config: BufferPoolConfig,
    pool: Vec<Page>,
    descriptors: Vec<FrameDescriptor>,
    directory: PageDirectory,
    clock: ClockCursor,
    stats: BufferStats,
}

impl BufferPoolManager {
    pub fn new(config: BufferPoolConfig) -> BufferResult<Self> {
        config.validate().map_err(BufferError::config)?;

        let n = config.num_frames;
        db_debug!("buffer", "creating buffer pool with {} frames", n);

        Ok(Self {
            pool: (0..n).map(|_| Page::new(PageId::default())).collect(),
            descriptors: (0..n).map(|_| FrameDescriptor::new()).collect(),
            directory: PageDirectory::with_capacity(config.directory_capacity()),
            clock: ClockCursor::new(n),
            stats: BufferStats::default(),
            config,
        })
    }

    pub fn with_frames(num_frames: usize) -> BufferResult<Self> {
        Self::new(BufferPoolConfig::new(num_frames))
    }

    pub fn config(&self) -> &BufferPoolConfig {
        &self.config
    }

    pub fn num_frames(&self) -> usize {
        self.descriptors.len()
    }

    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Frame currently holding the page, if it is resident.
    pub fn lookup(&self, file: &FileRef, page_id: PageId) -> Option<FrameId> {
        self.directory.lookup(file.id(), page_id)
    }

    /// Pins the page, reading it from `file` on a miss.
    pub fn fetch_page(&mut self, file: &FileRef, page_id: PageId) -> BufferResult<PageHandle> {
        let file_id = file.id();

        if let Some(frame) = self.directory.lookup(file_id, page_id) {
            let desc = &mut self.descriptors[frame.index()];
            desc.referenced = true;
            desc.pin_count += 1;
            self.stats.hits += 1;

            db_trace!(
                "buffer",
                "hit: page {} of file {} in frame {} (pins={})",
                page_id,
                file_id,
                frame,
                desc.pin_count
            );
            return Ok(PageHandle::new(frame, desc.generation, file_id, page_id));
        }

        self.stats.misses += 1;
        let frame = self.allocate_frame()?;
        let page = file.read_page(page_id)?;

        db_trace!(
            "buffer",
            "miss: page {} of file {} loaded into frame {}",
            page_id,
            file_id,
            frame
        );
        Ok(self.install(frame, file, page))
    }

    /// Drops one pin. Releasing a page that is not resident is a no-op.
    pub fn release_page(
        &mut self,
        file: &FileRef,
        page_id: PageId,
        dirty: bool,
    ) -> BufferResult<()> {
        self.release_by_id(file.id(), page_id, dirty)
    }

    /// Drops the pin held by `handle`.
    pub fn release(&mut self, handle: PageHandle, dirty: bool) -> BufferResult<()> {
        self.check_handle(&handle)?;
        self.release_by_id(handle.file_id(), handle.page_id(), dirty)
    }

    /// Appends a page to `file` and pins it in a frame.
    ///
    /// The frame is claimed before the file grows, so an exhausted pool does
    /// not leave an orphan page behind.
    pub fn allocate_new_page(&mut self, file: &FileRef) -> BufferResult<(PageId, PageHandle)> {
        let frame = self.allocate_frame()?;
        let page = file.allocate_page()?;
        let page_id = page.id();

        db_debug!(
            "buffer",
            "allocated page {} of file {} in frame {}",
            page_id,
            file.id(),
            frame
        );
        Ok((page_id, self.install(frame, file, page)))
    }

    /// Drops the page from the pool without writing it back, then deletes it
    /// from `file`.
    ///
    /// Pins are not checked: any outstanding handle for the page goes stale.
    pub fn dispose_page(&mut self, file: &FileRef, page_id: PageId) -> BufferResult<()> {
        if let Some(frame) = self.directory.remove(file.id(), page_id) {
            let desc = &mut self.descriptors[frame.index()];
            if desc.pin_count > 0 {
                db_warn!(
                    "buffer",
                    "disposing page {} of file {} with {} outstanding pins",
                    page_id,
                    file.id(),
                    desc.pin_count
                );
            }
            desc.clear();
        }

        file.delete_page(page_id)?;
        Ok(())
    }

    /// Writes back and evicts every frame owned by `file`.
    ///
    /// Frames are processed in frame order; a pinned frame aborts the flush,
    /// leaving frames already processed evicted.
    pub fn flush_file(&mut self, file: &FileRef) -> BufferResult<()> {
        let file_id = file.id();

        for index in 0..self.descriptors.len() {
            let frame = FrameId(index);
            let desc = &self.descriptors[index];
            if desc.owner_id() != Some(file_id) {
                continue;
            }
            if desc.pin_count != 0 {
                return Err(BufferError::FramePinned {
                    file: file_id,
                    page_id: desc.page_id,
                    frame,
                });
            }
            if !desc.valid {
                return Err(corrupt(frame, desc));
            }

            self.write_back(frame)?;

            let desc = &mut self.descriptors[index];
            self.directory.remove(file_id, desc.page_id);
            desc.clear();
        }

        db_debug!("buffer", "flushed file {}", file_id);
        Ok(())
    }

    /// Writes back every dirty frame, pinned or not, without evicting.
    pub fn flush_all(&mut self) -> BufferResult<()> {
        for index in 0..self.descriptors.len() {
            if self.descriptors[index].valid {
                self.write_back(FrameId(index))?;
            }
        }
        Ok(())
    }

    pub fn inspect(&self) -> BufferSnapshot {
        let frames: Vec<FrameInfo> = self
            .descriptors
            .iter()
            .enumerate()
            .map(|(i, desc)| FrameInfo::from_descriptor(FrameId(i), desc))
            .collect();
        let valid_frames = frames.iter().filter(|f| f.valid).count();

        BufferSnapshot {
            frames,
            valid_frames,
            directory_entries: self.directory.len(),
            clock_hand: self.clock.position(),
            stats: self.stats,
        }
    }

    pub fn page(&self, handle: &PageHandle) -> BufferResult<&Page> {
        self.check_handle(handle)?;
        Ok(&self.pool[handle.frame_id().index()])
    }

    pub fn page_mut(&mut self, handle: &PageHandle) -> BufferResult<&mut Page> {
        self.check_handle(handle)?;
        Ok(&mut self.pool[handle.frame_id().index()])
    }

    /// Page bytes, shorthand for `page(handle)?.data()`.
    pub fn data(&self, handle: &PageHandle) -> BufferResult<&[u8]> {
        Ok(self.page(handle)?.data().as_slice())
    }

    pub fn data_mut(&mut self, handle: &PageHandle) -> BufferResult<&mut [u8]> {
        Ok(self.page_mut(handle)?.data_mut().as_mut_slice())
    }

    /// Runs the clock until a frame is free to use.
    ///
    /// Referenced frames lose their bit and are skipped without counting.
    /// Pinned frames count as blocked visits; clearing a bit restarts the
    /// count, so `N` blocked visits in a row means every frame is pinned.
    /// Bits are only cleared here, never set, so after the first lap the
    /// count can no longer restart and the sweep ends within `2N` visits.
    fn allocate_frame(&mut self) -> BufferResult<FrameId> {
        let num_frames = self.num_frames();
        let mut blocked = 0;

        loop {
            let frame = self.clock.advance();
            let desc = &mut self.descriptors[frame.index()];

            match ClockCursor::visit(desc) {
                Visit::Free => {
                    desc.clear();
                    return Ok(frame);
                }
                Visit::SecondChance => {
                    desc.referenced = false;
                    blocked = 0;
                }
                Visit::Pinned => {
                    blocked += 1;
                    if blocked >= num_frames {
                        db_warn!("buffer", "pool exhausted: all {} frames pinned", num_frames);
                        return Err(BufferError::PoolExhausted { num_frames });
                    }
                }
                Visit::Victim => {
                    self.evict(frame)?;
                    return Ok(frame);
                }
            }
        }
    }

    fn evict(&mut self, frame: FrameId) -> BufferResult<()> {
        self.write_back(frame)?;

        let desc = &mut self.descriptors[frame.index()];
        let Some(owner) = desc.owner_id() else {
            return Err(corrupt(frame, desc));
        };

        db_debug!(
            "buffer",
            "evicting page {} of file {} from frame {}",
            desc.page_id,
            owner,
            frame
        );
        self.directory.remove(owner, desc.page_id);
        desc.clear();
        self.stats.evictions += 1;
        Ok(())
    }

    /// Writes the frame to its owner if dirty and clears the dirty bit.
    fn write_back(&mut self, frame: FrameId) -> BufferResult<()> {
        let desc = &mut self.descriptors[frame.index()];
        if !desc.dirty {
            return Ok(());
        }
        let Some(owner) = desc.owner.as_ref() else {
            return Err(corrupt(frame, desc));
        };

        owner.write_page(&self.pool[frame.index()])?;
        db_debug!(
            "buffer",
            "wrote back page {} of file {} from frame {}",
            desc.page_id,
            owner.id(),
            frame
        );
        desc.dirty = false;
        self.stats.write_backs += 1;
        Ok(())
    }

    fn install(&mut self, frame: FrameId, file: &FileRef, page: Page) -> PageHandle {
        let file_id = file.id();
        let page_id = page.id();

        self.pool[frame.index()] = page;
        let previous = self.directory.insert(file_id, page_id, frame);
        debug_assert!(previous.is_none(), "page {page_id} already resident");

        let desc = &mut self.descriptors[frame.index()];
        desc.set(file, page_id);
        PageHandle::new(frame, desc.generation, file_id, page_id)
    }

    fn release_by_id(&mut self, file: FileId, page_id: PageId, dirty: bool) -> BufferResult<()> {
        let Some(frame) = self.directory.lookup(file, page_id) else {
            db_trace!(
                "buffer",
                "release of non-resident page {} of file {} ignored",
                page_id,
                file
            );
            return Ok(());
        };

        let desc = &mut self.descriptors[frame.index()];
        if desc.pin_count == 0 {
            return Err(BufferError::NotPinned {
                file,
                page_id,
                frame,
            });
        }

        desc.pin_count -= 1;
        if dirty {
            desc.dirty = true;
        }
        Ok(())
    }

    fn check_handle(&self, handle: &PageHandle) -> BufferResult<()> {
        let frame = handle.frame_id();
        let live = self.descriptors.get(frame.index()).is_some_and(|desc| {
            desc.valid && desc.pin_count > 0 && desc.generation == handle.generation()
        });

        if !live {
            return Err(BufferError::StaleHandle {
                frame,
                page_id: handle.page_id(),
            });
        }
        Ok(())
    }
}

impl Drop for BufferPoolManager {
    fn drop(&mut self) {
        if !self.config.flush_on_drop {
            return;
        }

        for index in 0..self.descriptors.len() {
            if !self.descriptors[index].valid {
                continue;
            }
            if let Err(e) = self.write_back(FrameId(index)) {
                db_error!("buffer", "write-back of frame {} failed on drop: {}", index, e);
            }
        }
    }
}

fn corrupt(frame: FrameId, desc: &FrameDescriptor) -> BufferError {
    BufferError::CorruptFrame {
        frame,
        valid: desc.valid,
        dirty: desc.dirty,
        referenced: desc.referenced,
    }
}
