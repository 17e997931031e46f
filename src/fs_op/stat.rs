use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Lightweight classification of a probed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, device node and so on).
    Other,
}

impl PathType {
    /// Classify `path` on the real filesystem. Symlinks are followed, so a
    /// dangling link classifies as `NotFound`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(m) if m.is_dir() => PathType::Directory,
            Ok(m) if m.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }
}

/// The filesystem oracle consulted by a resolver.
///
/// Both calls are blocking and are issued strictly one after another;
/// the first successful probe ends a lookup.
pub trait FileSystem {
    /// Return `true` if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// File names of the entries directly inside `dir`, in whatever order
    /// the backend yields them.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        PathType::of(path) != PathType::NotFound
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        // walkdir reports the root itself at depth 0, so an unreadable or
        // missing root surfaces as the first error.
        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        (**self).list(dir)
    }
}
