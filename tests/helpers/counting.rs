#![allow(dead_code)]

use std::collections::HashMap;

use clockbuf::{
    FileId, MemoryFile, Page, PageFile, PageId,
    storage::StorageResult,
};
use parking_lot::Mutex;

/// Memory file that records how often each page is read and written.
pub struct CountingFile {
    inner: MemoryFile,
    reads: Mutex<HashMap<PageId, usize>>,
    writes: Mutex<HashMap<PageId, usize>>,
}

#[allow(dead_code)]
impl CountingFile {
    /// `pages` pages, page `i` starting with byte `i`.
    pub fn seeded(pages: u64) -> Self {
        let inner = MemoryFile::new("counting");
        for i in 0..pages {
            let mut page = inner.allocate_page().expect("allocate");
            page.data_mut()[0] = i as u8;
            inner.write_page(&page).expect("seed");
        }
        Self {
            inner,
            reads: Mutex::new(HashMap::new()),
            writes: Mutex::new(HashMap::new()),
        }
    }

    pub fn reads(&self, page_id: PageId) -> usize {
        self.reads.lock().get(&page_id).copied().unwrap_or(0)
    }

    pub fn writes(&self, page_id: PageId) -> usize {
        self.writes.lock().get(&page_id).copied().unwrap_or(0)
    }

    pub fn total_writes(&self) -> usize {
        self.writes.lock().values().sum()
    }

    pub fn stored_byte(&self, page_id: PageId, offset: usize) -> u8 {
        self.inner.read_page(page_id).expect("stored page").data()[offset]
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.inner.contains(page_id)
    }
}

impl PageFile for CountingFile {
    fn id(&self) -> FileId {
        self.inner.id()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn read_page(&self, page_id: PageId) -> StorageResult<Page> {
        *self.reads.lock().entry(page_id).or_default() += 1;
        self.inner.read_page(page_id)
    }

    fn write_page(&self, page: &Page) -> StorageResult<()> {
        *self.writes.lock().entry(page.id()).or_default() += 1;
        self.inner.write_page(page)
    }

    fn allocate_page(&self) -> StorageResult<Page> {
        self.inner.allocate_page()
    }

    fn delete_page(&self, page_id: PageId) -> StorageResult<()> {
        self.inner.delete_page(page_id)
    }
}
