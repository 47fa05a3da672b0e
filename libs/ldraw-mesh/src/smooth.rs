//! # Normal Smoothing Synthesizer
//!
//! Produces one normal per vertex from the completed buffers.
//!
//! Vertices are never deduplicated, so "adjacency" cannot come from shared
//! indices: two faces meet exactly when they own vertices at coincident
//! positions. Each vertex therefore blends the face normals of every
//! triangle that touches its position, as long as the angle to its own face
//! normal stays inside the smoothing threshold.
//!
//! Candidate triangles come from a hash of quantized positions rather than a
//! scan of the whole triangle buffer; the 27-cell neighborhood around a
//! vertex covers every position within one weld epsilon.

use std::collections::HashMap;

use config::constants::{DEGENERATE_FACE_EPSILON, EPSILON, POSITION_WELD_EPSILON};
use glam::DVec3;

/// Fallback normal for degenerate faces and empty smoothing sets.
const UP: DVec3 = DVec3::Y;

/// Synthesizes one normal per vertex, in vertex-buffer order.
///
/// `threshold_degrees` is the maximum angle between two face normals at a
/// shared position for them to blend. Positions must be the original,
/// unscaled LDraw-unit values; scaling first would push degenerate-face
/// detection below its tolerance.
pub fn synthesize_normals(
    vertices: &[DVec3],
    triangles: &[[u32; 3]],
    threshold_degrees: f64,
) -> Vec<DVec3> {
    let face_normals: Vec<DVec3> = triangles
        .iter()
        .map(|tri| face_normal(vertices, tri))
        .collect();

    // First triangle containing each vertex index.
    let mut own_face = vec![u32::MAX; vertices.len()];
    for (index, tri) in triangles.iter().enumerate() {
        for &vertex in tri {
            let slot = &mut own_face[vertex as usize];
            if *slot == u32::MAX {
                *slot = index as u32;
            }
        }
    }

    // Triangle indices bucketed by the quantized positions of their corners.
    let mut grid: HashMap<[i64; 3], Vec<u32>> = HashMap::new();
    for (index, tri) in triangles.iter().enumerate() {
        for &vertex in tri {
            grid.entry(cell_of(vertices[vertex as usize]))
                .or_default()
                .push(index as u32);
        }
    }

    let cos_threshold = threshold_degrees.to_radians().cos();
    let weld_squared = POSITION_WELD_EPSILON * POSITION_WELD_EPSILON;
    let mut normals = Vec::with_capacity(vertices.len());
    let mut candidates: Vec<u32> = Vec::new();

    for (index, &position) in vertices.iter().enumerate() {
        let own = match own_face[index] {
            u32::MAX => {
                // Vertex referenced by no triangle.
                normals.push(UP);
                continue;
            }
            face => face_normals[face as usize],
        };

        candidates.clear();
        let center = cell_of(position);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = [center[0] + dx, center[1] + dy, center[2] + dz];
                    if let Some(bucket) = grid.get(&key) {
                        candidates.extend_from_slice(bucket);
                    }
                }
            }
        }
        candidates.sort_unstable();
        candidates.dedup();

        let mut sum = DVec3::ZERO;
        for &candidate in &candidates {
            let tri = triangles[candidate as usize];
            let touches = tri
                .iter()
                .any(|&v| vertices[v as usize].distance_squared(position) < weld_squared);
            if !touches {
                continue;
            }
            let normal = face_normals[candidate as usize];
            if own.dot(normal) >= cos_threshold {
                sum += normal;
            }
        }

        if sum.length_squared() < EPSILON {
            normals.push(UP);
        } else {
            normals.push(sum.normalize());
        }
    }

    normals
}

/// Normalized face normal of one triangle, or the fallback up normal when
/// the cross product degenerates.
fn face_normal(vertices: &[DVec3], tri: &[u32; 3]) -> DVec3 {
    let v0 = vertices[tri[0] as usize];
    let v1 = vertices[tri[1] as usize];
    let v2 = vertices[tri[2] as usize];
    let cross = (v1 - v0).cross(v2 - v0);
    if cross.length_squared() < DEGENERATE_FACE_EPSILON {
        UP
    } else {
        cross.normalize()
    }
}

/// Quantizes a position to its grid cell (cell size = weld epsilon).
fn cell_of(position: DVec3) -> [i64; 3] {
    [
        (position.x / POSITION_WELD_EPSILON).floor() as i64,
        (position.y / POSITION_WELD_EPSILON).floor() as i64,
        (position.z / POSITION_WELD_EPSILON).floor() as i64,
    ]
}
