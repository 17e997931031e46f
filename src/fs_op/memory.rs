//! In-memory [`FileSystem`] with a probe log.
//!
//! Useful wherever the exact order of existence checks matters: every
//! `exists` call is recorded, so a test can assert which candidates a
//! lookup tried and in what order.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::stat::FileSystem;

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Vec<PathBuf>,
    // Directory listings in insertion order; `None` marks an unreadable dir.
    dirs: BTreeMap<PathBuf, Option<Vec<String>>>,
    probes: RefCell<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file (or any existing path).
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Register a listable directory. The directory itself also exists.
    pub fn with_dir<I, S>(mut self, dir: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries.into_iter().map(Into::into).collect();
        self.dirs.insert(dir.into(), Some(entries));
        self
    }

    /// Register a directory that exists but cannot be listed.
    pub fn with_unreadable_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(dir.into(), None);
        self
    }

    /// Every path passed to `exists`, oldest first.
    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes.borrow().clone()
    }

    pub fn clear_probes(&self) {
        self.probes.borrow_mut().clear();
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.probes.borrow_mut().push(path.to_path_buf());
        self.files.iter().any(|f| f == path) || self.dirs.contains_key(path)
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        match self.dirs.get(dir) {
            Some(Some(entries)) => Ok(entries.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot read {}", dir.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory {}", dir.display()),
            )),
        }
    }
}
