//! # Command Types
//!
//! Typed values for each meaningful LDraw line.
//!
//! All numeric fields are fully parsed - positions are `DVec3`, sub-file
//! transforms are resolved `DMat4` matrices. Color codes are carried through
//! uninterpreted; material resolution belongs to a peer layer.

use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::bfc::BfcDirective;

/// Raw LDraw color code. Read but never interpreted by this engine.
pub type ColorCode = u32;

// =============================================================================
// COMMANDS
// =============================================================================

/// One parsed LDraw line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Type 0 - comment or meta statement.
    Meta(Meta),
    /// Type 1 - sub-file reference.
    SubFileRef(SubFileRef),
    /// Type 2 - line primitive (no mesh contribution).
    Line(LinePrimitive),
    /// Type 3 - triangle.
    Triangle(TrianglePrimitive),
    /// Type 4 - quadrilateral.
    Quad(QuadPrimitive),
    /// Type 5 - optional line (no mesh contribution).
    OptionalLine(OptionalLinePrimitive),
}

/// A type-0 statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meta {
    /// Free-form comment text, including meta statements this engine
    /// does not act on.
    Comment(String),
    /// `0 AUTHOR <name>` / `0 !AUTHOR <name>` attribution.
    Author(String),
    /// `0 BFC <directive>` winding control.
    Bfc(BfcDirective),
}

/// A type-1 sub-file reference:
/// `1 color x y z a b c d e f g h i filename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubFileRef {
    pub color: ColorCode,
    /// Local transform, already assembled from the line's 12 scalars.
    pub transform: DMat4,
    /// Referenced file name, verbatim to end of line (may contain spaces).
    pub file: String,
}

/// A type-2 line primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub color: ColorCode,
    pub points: [DVec3; 2],
}

/// A type-3 triangle in parse order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrianglePrimitive {
    pub color: ColorCode,
    pub vertices: [DVec3; 3],
}

/// A type-4 quadrilateral in parse order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadPrimitive {
    pub color: ColorCode,
    pub vertices: [DVec3; 4],
}

/// A type-5 optional line with its two control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalLinePrimitive {
    pub color: ColorCode,
    pub points: [DVec3; 2],
    pub control: [DVec3; 2],
}

// =============================================================================
// TRANSFORM ASSEMBLY
// =============================================================================

/// Builds the 4x4 affine transform from a sub-file line's 12 scalars.
///
/// The line carries `(x, y, z, a, b, c, d, e, f, g, h, i)`, laid out as the
/// row-major matrix
///
/// ```text
/// [ a b c x ]
/// [ d e f y ]
/// [ g h i z ]
/// [ 0 0 0 1 ]
/// ```
///
/// glam matrices are column-major, so each row lands across the columns.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use ldraw_lines::transform_from_line;
///
/// // Pure translation by (2, 4, 6).
/// let m = transform_from_line([2.0, 4.0, 6.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(m.transform_point3(DVec3::ZERO), DVec3::new(2.0, 4.0, 6.0));
/// ```
pub fn transform_from_line(values: [f64; 12]) -> DMat4 {
    let [x, y, z, a, b, c, d, e, f, g, h, i] = values;
    DMat4::from_cols(
        DVec4::new(a, d, g, 0.0),
        DVec4::new(b, e, h, 0.0),
        DVec4::new(c, f, i, 0.0),
        DVec4::new(x, y, z, 1.0),
    )
}
