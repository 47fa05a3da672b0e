//! # Axis-Aligned Bounds
//!
//! Bounding box computed by the mesh finalizer from scaled positions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bounds3 {
    /// Computes bounds over a set of points.
    ///
    /// An empty set yields a degenerate box at the origin.
    pub fn from_points(points: &[DVec3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self {
                min: DVec3::ZERO,
                max: DVec3::ZERO,
            };
        };

        let mut min = first;
        let mut max = first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Returns the box center.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the box extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bounds = Bounds3::from_points(&[
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::ZERO,
        ]);
        assert_eq!(bounds.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_empty_is_degenerate_at_origin() {
        let bounds = Bounds3::from_points(&[]);
        assert_eq!(bounds.min, DVec3::ZERO);
        assert_eq!(bounds.max, DVec3::ZERO);
        assert_eq!(bounds.size(), DVec3::ZERO);
    }

    #[test]
    fn test_center_and_size() {
        let bounds = Bounds3::from_points(&[DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0)]);
        assert_eq!(bounds.center(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.size(), DVec3::new(2.0, 4.0, 6.0));
    }
}
