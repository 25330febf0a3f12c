use std::{
    collections::BTreeSet,
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::{
    db_debug,
    storage::{
        errors::{StorageError, StorageResult},
        file::{FileId, PageFile},
        page::{PAGE_SIZE, Page, PageId},
    },
};

/// Pages stored back to back in one OS file; page `i` lives at `i * PAGE_SIZE`.
///
/// Deleted page ids are remembered for the lifetime of the handle and reads
/// of them fail. Their space is not reclaimed.
#[derive(Debug)]
pub struct DiskFile {
    id: FileId,
    name: String,
    path: PathBuf,
    inner: Mutex<DiskInner>,
}

#[derive(Debug)]
struct DiskInner {
    file: File,
    next_page_id: u64,
    deleted: BTreeSet<PageId>,
}

impl DiskFile {
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let size = file.metadata()?.len();
        let next_page_id = size / PAGE_SIZE as u64;
        let id = FileId::next();

        db_debug!(
            "storage",
            "opened {} as file {} with {} pages",
            path.display(),
            id,
            next_page_id
        );

        Ok(Self {
            id,
            name: path.display().to_string(),
            path,
            inner: Mutex::new(DiskInner {
                file,
                next_page_id,
                deleted: BTreeSet::new(),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn num_pages(&self) -> u64 {
        self.inner.lock().next_page_id
    }

    pub fn sync(&self) -> StorageResult<()> {
        self.inner.lock().file.sync_data()?;
        Ok(())
    }
}

impl DiskInner {
    fn check_live(&self, file: FileId, page_id: PageId) -> StorageResult<()> {
        if page_id.0 >= self.next_page_id || self.deleted.contains(&page_id) {
            return Err(StorageError::PageNotFound { file, page_id });
        }
        Ok(())
    }

    fn write_at(&mut self, page: &Page) -> StorageResult<()> {
        let offset = page.id().0 * PAGE_SIZE as u64;
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(page.data())?;
        Ok(())
    }
}

impl PageFile for DiskFile {
    fn id(&self) -> FileId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read_page(&self, page_id: PageId) -> StorageResult<Page> {
        let mut inner = self.inner.lock();
        inner.check_live(self.id, page_id)?;

        let mut page = Page::new(page_id);
        let offset = page_id.0 * PAGE_SIZE as u64;
        inner.file.seek(SeekFrom::Start(offset))?;
        inner.file.read_exact(page.data_mut())?;
        Ok(page)
    }

    fn write_page(&self, page: &Page) -> StorageResult<()> {
        let mut inner = self.inner.lock();
        inner.check_live(self.id, page.id())?;
        inner.write_at(page)
    }

    fn allocate_page(&self) -> StorageResult<Page> {
        let mut inner = self.inner.lock();
        let page = Page::new(PageId(inner.next_page_id));
        inner.write_at(&page)?;
        inner.next_page_id += 1;
        Ok(page)
    }

    fn delete_page(&self, page_id: PageId) -> StorageResult<()> {
        let mut inner = self.inner.lock();
        inner.check_live(self.id, page_id)?;
        inner.deleted.insert(page_id);
        Ok(())
    }
}
