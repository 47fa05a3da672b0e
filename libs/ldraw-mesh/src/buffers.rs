//! # Geometry Accumulator
//!
//! Append-only vertex/triangle buffers fed by the resolver.
//!
//! Purely a recording surface: no bounds, no normals, no vertex
//! deduplication. Vertices carry no identity beyond position, and vertices
//! from different primitives are never merged even when numerically equal.
//! Single-writer by construction (the depth-first resolver).

use glam::DVec3;

/// Flat vertex/index buffers in emission order.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if nothing has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends one triangle: 3 fresh vertices, 1 index triple.
    pub fn add_triangle(&mut self, v0: DVec3, v1: DVec3, v2: DVec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend([v0, v1, v2]);
        self.triangles.push([base, base + 1, base + 2]);
    }

    /// Appends one quadrilateral: 4 fresh vertices, 2 index triples.
    ///
    /// The split is `(base, base+1, base+2)` and `(base, base+2, base+3)`;
    /// only the diagonal pair `(base, base+2)` is shared between the two
    /// triangles.
    pub fn add_quad(&mut self, v0: DVec3, v1: DVec3, v2: DVec3, v3: DVec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend([v0, v1, v2, v3]);
        self.triangles.push([base, base + 1, base + 2]);
        self.triangles.push([base, base + 2, base + 3]);
    }

    /// Returns a view of the vertices in emission order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a view of the triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Consumes the buffers, yielding the raw vectors.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }
}
