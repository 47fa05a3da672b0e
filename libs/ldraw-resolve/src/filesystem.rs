//! # Filesystem Abstractions
//!
//! The resolver reads part files through this trait so tests can run against
//! an in-memory implementation instead of mocks or temp directories.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimal filesystem surface the resolver needs.
pub trait FileSystem {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// True if `path` names an existing file.
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Error raised when filesystem operations fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileSystemError {
    /// The requested path could not be found.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

// =============================================================================
// OS FILESYSTEM
// =============================================================================

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl FileSystem for OsFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FileSystemError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

// =============================================================================
// IN-MEMORY FILESYSTEM
// =============================================================================

/// In-memory filesystem for tests.
///
/// Inserting a file registers every ancestor as a directory, so library
/// roots exist as soon as they contain a part.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use ldraw_resolve::filesystem::{FileSystem, InMemoryFilesystem};
///
/// let mut fs = InMemoryFilesystem::default();
/// fs.insert("lib/parts/brick.dat", "0 brick");
/// assert!(fs.is_file(Path::new("lib/parts/brick.dat")));
/// assert!(fs.is_dir(Path::new("lib")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryFilesystem {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl InMemoryFilesystem {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        let mut ancestor = path.as_path();
        while let Some(parent) = ancestor.parent() {
            if !parent.as_os_str().is_empty() {
                self.directories.insert(parent.to_path_buf());
            }
            ancestor = parent;
        }
        self.files.insert(path, contents.into());
    }
}

impl FileSystem for InMemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }
}
