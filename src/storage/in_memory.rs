use std::collections::HashMap;

use parking_lot::Mutex;

use crate::storage::{
    errors::{StorageError, StorageResult},
    file::{FileId, PageFile},
    page::{Page, PageId},
};

/// A page file kept entirely in memory. Handy for tests and scratch tables.
#[derive(Debug)]
pub struct MemoryFile {
    id: FileId,
    name: String,
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    pages: HashMap<PageId, Page>,
    next_page_id: u64,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FileId::next(),
            name: name.into(),
            inner: Mutex::new(MemoryInner::default()),
        }
    }

    pub fn num_pages(&self) -> usize {
        self.inner.lock().pages.len()
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.inner.lock().pages.contains_key(&page_id)
    }
}

impl PageFile for MemoryFile {
    fn id(&self) -> FileId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read_page(&self, page_id: PageId) -> StorageResult<Page> {
        self.inner
            .lock()
            .pages
            .get(&page_id)
            .cloned()
            .ok_or(StorageError::PageNotFound {
                file: self.id,
                page_id,
            })
    }

    fn write_page(&self, page: &Page) -> StorageResult<()> {
        let mut inner = self.inner.lock();
        match inner.pages.get_mut(&page.id()) {
            Some(stored) => {
                stored.data_mut().copy_from_slice(page.data());
                Ok(())
            }
            None => Err(StorageError::PageNotFound {
                file: self.id,
                page_id: page.id(),
            }),
        }
    }

    fn allocate_page(&self) -> StorageResult<Page> {
        let mut inner = self.inner.lock();
        let page = Page::new(PageId(inner.next_page_id));
        inner.next_page_id += 1;
        inner.pages.insert(page.id(), page.clone());
        Ok(page)
    }

    fn delete_page(&self, page_id: PageId) -> StorageResult<()> {
        self.inner
            .lock()
            .pages
            .remove(&page_id)
            .map(|_| ())
            .ok_or(StorageError::PageNotFound {
                file: self.id,
                page_id,
            })
    }
}
