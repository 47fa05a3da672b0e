//! # Resolution Errors
//!
//! The fatal error taxonomy. Only construction-time problems surface here;
//! everything encountered mid-parse (malformed lines, unresolvable
//! sub-files, depth-guard trips) is recovered locally with a warning and
//! never escapes the resolver.

use std::path::PathBuf;
use thiserror::Error;

use crate::filesystem::FileSystemError;

/// Errors that abort an entire resolution session.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The root file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The root file is not an LDraw file.
    #[error("not an LDraw file (expected .dat or .ldr): {}", path.display())]
    WrongExtension { path: PathBuf },

    /// The library directory does not exist.
    #[error("library directory not found: {}", path.display())]
    LibraryNotFound { path: PathBuf },

    /// Reading the root file failed.
    #[error(transparent)]
    Filesystem(#[from] FileSystemError),
}
