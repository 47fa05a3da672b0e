//! # LDraw Primitive Resolution
//!
//! Resolves an LDraw part file and its recursive sub-file references into a
//! single finalized triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ ldraw-lines  │──▶│   Resolver    │──▶│ MeshBuffers  │──▶│ ResolvedMesh │
//! │ (tokenizer)  │   │ (walk + BFC)  │   │ (accumulate) │   │ (smooth +    │
//! └──────────────┘   └───────────────┘   └──────────────┘   │  scale)      │
//!                           │                               └──────────────┘
//!                    ┌──────┴───────┐
//!                    │ PartLibrary  │
//!                    │ (search path)│
//!                    └──────────────┘
//! ```
//!
//! The resolver walks depth-first from the root file, composing each
//! reference's transform and resolving winding through the BFC state
//! machine. World-space triangles land in an append-only accumulator; the
//! finalizer synthesizes angle-threshold smoothed normals and scales to
//! output units.
//!
//! All file access goes through the [`FileSystem`] trait, so the whole
//! pipeline is testable against [`InMemoryFilesystem`] without touching
//! disk.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ldraw_resolve::resolve_mesh;
//!
//! let mesh = resolve_mesh("models/car.ldr", "/usr/share/ldraw", 30.0)?;
//! println!("{} vertices", mesh.positions().len());
//! ```

pub mod error;
pub mod filesystem;
pub mod library;
pub mod placement;
pub mod resolver;
pub mod winding;

pub use error::ResolveError;
pub use filesystem::{FileSystem, FileSystemError, InMemoryFilesystem, OsFilesystem};
pub use library::PartLibrary;
pub use placement::{read_placements, Placement};
pub use resolver::Resolver;
pub use winding::{Certification, WindingState};

// Finalized mesh types, re-exported so consumers need only this crate.
pub use ldraw_mesh::{Bounds3, ResolvedMesh};

use std::path::Path;

/// Resolves a root part file against a library on the real filesystem.
///
/// Convenience wrapper over [`Resolver`] with [`OsFilesystem`]. The
/// smoothing angle is in degrees; vertices whose faces meet at less than
/// this angle share a blended normal.
pub fn resolve_mesh(
    root: impl AsRef<Path>,
    library: impl AsRef<Path>,
    smoothing_angle_degrees: f64,
) -> Result<ResolvedMesh, ResolveError> {
    let mut resolver = Resolver::new(OsFilesystem, library.as_ref())?;
    resolver.resolve(root.as_ref(), smoothing_angle_degrees)
}
