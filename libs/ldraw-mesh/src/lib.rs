//! # LDraw Mesh
//!
//! Geometry buffers and mesh synthesis for resolved LDraw geometry.
//!
//! ## Architecture
//!
//! ```text
//! ldraw-resolve (world-space emissions) → MeshBuffers → ResolvedMesh
//! ```
//!
//! The resolver appends already-transformed, LDraw-unit positions into
//! [`MeshBuffers`]; nothing is deduplicated. [`ResolvedMesh::from_buffers`]
//! then synthesizes per-vertex normals with the angle-threshold smoothing
//! pass, scales positions to output units, and computes bounds.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use ldraw_mesh::{MeshBuffers, ResolvedMesh};
//!
//! let mut buffers = MeshBuffers::new();
//! buffers.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
//! let mesh = ResolvedMesh::from_buffers(buffers, 30.0);
//! assert_eq!(mesh.vertex_count(), 3);
//! ```

pub mod bounds;
pub mod buffers;
pub mod mesh;
pub mod smooth;

pub use bounds::Bounds3;
pub use buffers::MeshBuffers;
pub use mesh::ResolvedMesh;
pub use smooth::synthesize_normals;
