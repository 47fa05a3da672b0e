//! # Resolved Mesh
//!
//! The final, immutable artifact of a resolution session.
//!
//! Finalization order matters: normals are synthesized from the original
//! LDraw-unit positions *before* scaling, because post-scale magnitudes are
//! small enough to push cross products into the degenerate range.

use config::constants::LDU_TO_METERS;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds3;
use crate::buffers::MeshBuffers;
use crate::smooth::synthesize_normals;

/// An immutable triangle mesh with per-vertex normals and bounds.
///
/// Positions are in output units (meters); normals are unit length, one per
/// vertex, in vertex order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    bounds: Bounds3,
}

impl ResolvedMesh {
    /// Finalizes accumulated buffers into a mesh.
    ///
    /// Runs the smoothing synthesizer over the unscaled positions, scales
    /// every position by the fixed LDU factor, and computes bounds from the
    /// scaled result.
    pub fn from_buffers(buffers: MeshBuffers, smoothing_angle_degrees: f64) -> Self {
        let (vertices, triangles) = buffers.into_parts();
        let normals = synthesize_normals(&vertices, &triangles, smoothing_angle_degrees);
        let positions: Vec<DVec3> = vertices.into_iter().map(|v| v * LDU_TO_METERS).collect();
        let bounds = Bounds3::from_points(&positions);
        Self {
            positions,
            normals,
            triangles,
            bounds,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the scaled vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the per-vertex normals (same order as positions).
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the axis-aligned bounds of the scaled positions.
    #[inline]
    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Exports positions as a flat f32 array for GPU upload.
    ///
    /// Returns `[x, y, z, x, y, z, ...]`.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as a flat f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as a flat u32 array for GPU upload.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.extend_from_slice(tri);
        }
        result
    }
}

fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.push(p.x as f32);
        result.push(p.y as f32);
        result.push(p.z as f32);
    }
    result
}
