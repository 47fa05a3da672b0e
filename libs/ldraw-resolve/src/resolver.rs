//! # Recursive Primitive Resolver
//!
//! Depth-first walk over a part file and everything it references.
//!
//! Each frame composes its transform into its children and resolves winding
//! through [`WindingState`]; geometry statements emit already-transformed
//! world-space vertices into the accumulator. Only construction-time
//! validation is fatal - a missing sub-file or malformed line degrades the
//! mesh and the walk continues.
//!
//! Files are read and tokenized once per session (cache keyed by resolved
//! path), but geometry is expanded once per *reference*: a part used N times
//! contributes N copies.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use config::constants::MAX_SUBFILE_DEPTH;
use glam::DMat4;
use ldraw_lines::{parse_source, Command, Meta, QuadPrimitive, SubFileRef, TrianglePrimitive};
use ldraw_mesh::{MeshBuffers, ResolvedMesh};
use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::filesystem::{FileSystem, FileSystemError};
use crate::library::PartLibrary;
use crate::winding::WindingState;

/// Resolution session over a filesystem and one parts library.
#[derive(Debug)]
pub struct Resolver<F: FileSystem> {
    fs: F,
    library: PartLibrary,
    cache: HashMap<PathBuf, Rc<[Command]>>,
    authors: Vec<String>,
}

impl<F: FileSystem> Resolver<F> {
    /// Creates a session for the given library root.
    ///
    /// # Errors
    ///
    /// [`ResolveError::LibraryNotFound`] if the root is not a directory.
    pub fn new(fs: F, library_root: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let root = library_root.into();
        if !fs.is_dir(&root) {
            return Err(ResolveError::LibraryNotFound { path: root });
        }
        Ok(Self {
            fs,
            library: PartLibrary::new(root),
            cache: HashMap::new(),
            authors: Vec::new(),
        })
    }

    /// Resolves a root part file into a finalized mesh.
    ///
    /// The root must exist and carry a `.dat` or `.ldr` extension
    /// (case-insensitive); these checks are the only fatal path. The walk
    /// itself is best-effort: unresolvable references leave holes, never
    /// errors.
    pub fn resolve(
        &mut self,
        root: &Path,
        smoothing_angle_degrees: f64,
    ) -> Result<ResolvedMesh, ResolveError> {
        if !self.fs.is_file(root) {
            return Err(ResolveError::FileNotFound {
                path: root.to_path_buf(),
            });
        }
        if !has_ldraw_extension(root) {
            return Err(ResolveError::WrongExtension {
                path: root.to_path_buf(),
            });
        }

        let commands = self.load(root)?;
        let mut buffers = MeshBuffers::new();
        self.walk(root, &commands, DMat4::IDENTITY, false, 0, &mut buffers);
        Ok(ResolvedMesh::from_buffers(buffers, smoothing_angle_degrees))
    }

    /// Returns the attribution list collected from `0 AUTHOR` statements,
    /// in traversal order.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Reads and tokenizes a file, memoizing by resolved path.
    fn load(&mut self, path: &Path) -> Result<Rc<[Command]>, FileSystemError> {
        if let Some(commands) = self.cache.get(path) {
            return Ok(Rc::clone(commands));
        }
        let source = self.fs.read_to_string(path)?;
        let commands: Rc<[Command]> = Rc::from(parse_source(&source));
        debug!(path = %path.display(), commands = commands.len(), "parsed part file");
        self.cache.insert(path.to_path_buf(), Rc::clone(&commands));
        Ok(commands)
    }

    /// Walks one frame: every command of one file under one composed
    /// transform and inherited invert flag.
    fn walk(
        &mut self,
        path: &Path,
        commands: &[Command],
        transform: DMat4,
        invert: bool,
        depth: usize,
        buffers: &mut MeshBuffers,
    ) {
        let mut state = WindingState::new(invert);
        for command in commands {
            match command {
                Command::Meta(Meta::Bfc(directive)) => state.apply(*directive),
                Command::Meta(Meta::Author(name)) => self.authors.push(name.clone()),
                Command::Meta(Meta::Comment(_)) => {}
                Command::SubFileRef(reference) => {
                    self.enter(path, reference, &mut state, transform, depth, buffers);
                }
                Command::Triangle(triangle) => {
                    emit_triangle(triangle, &mut state, transform, buffers);
                }
                Command::Quad(quad) => {
                    emit_quad(quad, &mut state, transform, buffers);
                }
                // Edge types never contribute to the mesh and do not consume
                // the one-shot invert flag.
                Command::Line(_) | Command::OptionalLine(_) => {}
            }
        }
    }

    /// Processes one sub-file reference: winding composition, library
    /// lookup, recursion.
    fn enter(
        &mut self,
        path: &Path,
        reference: &SubFileRef,
        state: &mut WindingState,
        transform: DMat4,
        depth: usize,
        buffers: &mut MeshBuffers,
    ) {
        // The one-shot flag is consumed even when the reference is skipped.
        let mut child_invert = state.effective_invert();
        if reference.transform.determinant() < 0.0 {
            child_invert = !child_invert;
        }

        if depth + 1 > MAX_SUBFILE_DEPTH {
            warn!(
                file = %reference.file,
                depth,
                "max sub-file depth exceeded, skipping reference"
            );
            return;
        }

        let Some(resolved) = self.library.locate(&self.fs, &reference.file) else {
            warn!(
                file = %reference.file,
                referenced_from = %path.display(),
                "sub-file not found in library, skipping reference"
            );
            return;
        };

        match self.load(&resolved) {
            Ok(commands) => {
                let composed = transform * reference.transform;
                self.walk(&resolved, &commands, composed, child_invert, depth + 1, buffers);
            }
            Err(error) => {
                warn!(file = %reference.file, %error, "failed to read sub-file, skipping reference");
            }
        }
    }
}

/// Emits a triangle with the frame's effective winding.
///
/// Non-inverted statements are reversed on emission: parse order is treated
/// as back-facing under the default orientation.
fn emit_triangle(
    triangle: &TrianglePrimitive,
    state: &mut WindingState,
    transform: DMat4,
    buffers: &mut MeshBuffers,
) {
    let [v0, v1, v2] = triangle.vertices.map(|v| transform.transform_point3(v));
    if state.effective_invert() {
        buffers.add_triangle(v0, v1, v2);
    } else {
        buffers.add_triangle(v2, v1, v0);
    }
}

/// Emits a quad with the frame's effective winding (reversed diagonal split
/// when non-inverted).
fn emit_quad(
    quad: &QuadPrimitive,
    state: &mut WindingState,
    transform: DMat4,
    buffers: &mut MeshBuffers,
) {
    let [v0, v1, v2, v3] = quad.vertices.map(|v| transform.transform_point3(v));
    if state.effective_invert() {
        buffers.add_quad(v0, v1, v2, v3);
    } else {
        buffers.add_quad(v3, v2, v1, v0);
    }
}

/// True for `.dat`/`.ldr` files, case-insensitive.
fn has_ldraw_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("dat") || e.eq_ignore_ascii_case("ldr"))
}

// =============================================================================
// TESTS
// =============================================================================
