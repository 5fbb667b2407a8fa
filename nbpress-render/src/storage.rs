//! Storage capability
//!
//! Conversion never touches the filesystem directly; it reads and writes
//! through a [`Storage`] so the pipeline can be exercised in memory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Byte-level read/write access to notebook sources and rendered pages.
pub trait Storage {
    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file at `path` with `contents`, creating parent
    /// directories as needed. Readers see either the old or the new
    /// contents, never a partial write.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        // Same directory as the target, so the final rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(contents)?;
        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

/// In-memory storage keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing any previous contents.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Contents of `path` as text, if present and UTF-8.
    pub fn get_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains_key(path.as_ref())
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.insert(path, contents);
        Ok(())
    }
}
