use std::{collections::HashMap, sync::Arc};

use anyhow::{Context, Result, anyhow, bail};
use clockbuf::{
    BufferPoolConfig, BufferPoolManager, DiskFile, FileRef, PageHandle, PageId,
    debugger::{DebugLevel, set_debug_level},
};
use rustyline::{DefaultEditor, error::ReadlineError};

const HELP: &str = "\
commands:
  open <path>                     open a page file, prints its slot
  fetch <slot> <page>             pin a page
  write <slot> <page> <off> <b>   set one byte of a pinned page
  release <slot> <page> [dirty]   drop one pin
  alloc <slot>                    append a page and pin it
  dispose <slot> <page>           drop a page from the pool and the file
  flush <slot>                    write back and evict a file's pages
  flushall                        write back every dirty page
  inspect                         print frame descriptors
  quit";

struct Shell {
    bpm: BufferPoolManager,
    files: Vec<FileRef>,
    handles: HashMap<(usize, PageId), Vec<PageHandle>>,
}

impl Shell {
    fn file(&self, slot: &str) -> Result<(usize, FileRef)> {
        let slot: usize = slot.parse().context("file slot must be a number")?;
        let file = self
            .files
            .get(slot)
            .ok_or_else(|| anyhow!("no file in slot {slot}"))?;
        Ok((slot, Arc::clone(file)))
    }

    fn exec(&mut self, words: &[&str]) -> Result<bool> {
        match words {
            ["open", path] => {
                let file: FileRef = Arc::new(DiskFile::open(path)?);
                self.files.push(file);
                println!("slot {}", self.files.len() - 1);
            }
            ["fetch", slot, page] => {
                let (slot, file) = self.file(slot)?;
                let page_id = PageId(page.parse()?);
                let handle = self.bpm.fetch_page(&file, page_id)?;
                println!("page {} in frame {}", page_id, handle.frame_id());
                self.handles.entry((slot, page_id)).or_default().push(handle);
            }
            ["write", slot, page, offset, byte] => {
                let (slot, _) = self.file(slot)?;
                let page_id = PageId(page.parse()?);
                let offset: usize = offset.parse()?;
                let byte: u8 = byte.parse()?;
                let handle = self
                    .handles
                    .get(&(slot, page_id))
                    .and_then(|hs| hs.last())
                    .ok_or_else(|| anyhow!("page {page_id} is not pinned"))?;
                let data = self.bpm.data_mut(handle)?;
                *data
                    .get_mut(offset)
                    .ok_or_else(|| anyhow!("offset {offset} out of range"))? = byte;
            }
            ["release", slot, page, rest @ ..] => {
                let (slot, file) = self.file(slot)?;
                let page_id = PageId(page.parse()?);
                let dirty = matches!(rest, ["dirty"]);
                self.bpm.release_page(&file, page_id, dirty)?;
                if let Some(hs) = self.handles.get_mut(&(slot, page_id)) {
                    hs.pop();
                }
            }
            ["alloc", slot] => {
                let (slot, file) = self.file(slot)?;
                let (page_id, handle) = self.bpm.allocate_new_page(&file)?;
                println!("page {} in frame {}", page_id, handle.frame_id());
                self.handles.entry((slot, page_id)).or_default().push(handle);
            }
            ["dispose", slot, page] => {
                let (slot, file) = self.file(slot)?;
                let page_id = PageId(page.parse()?);
                self.bpm.dispose_page(&file, page_id)?;
                self.handles.remove(&(slot, page_id));
            }
            ["flush", slot] => {
                let (_, file) = self.file(slot)?;
                self.bpm.flush_file(&file)?;
            }
            ["flushall"] => self.bpm.flush_all()?,
            ["inspect"] => println!("{}", self.bpm.inspect()),
            ["help"] => println!("{HELP}"),
            ["quit"] | ["exit"] => return Ok(false),
            [] => {}
            _ => bail!("unknown command, try `help`"),
        }
        Ok(true)
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let debug_level = args
        .iter()
        .find_map(|arg| arg.strip_prefix("--debug="))
        .and_then(DebugLevel::parse)
        .unwrap_or(DebugLevel::Warn);
    let frames = args
        .iter()
        .find_map(|arg| arg.strip_prefix("--frames="))
        .map(|n| n.parse::<usize>())
        .transpose()
        .context("--frames expects a number")?
        .unwrap_or(clockbuf::config::DEFAULT_NUM_FRAMES);

    set_debug_level(debug_level);
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let mut shell = Shell {
        bpm: BufferPoolManager::new(BufferPoolConfig::new(frames))?,
        files: Vec::new(),
        handles: HashMap::new(),
    };

    println!("clockbuf shell ({frames} frames). Type `help` for commands, Ctrl+D to exit");
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("bufcli> ") {
            Ok(line) => {
                let words: Vec<&str> = line.split_whitespace().collect();
                if !words.is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                match shell.exec(&words) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) => println!("error: {error:#}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}
