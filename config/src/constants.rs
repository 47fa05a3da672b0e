//! # Configuration Constants
//!
//! Centralized constants for the LDraw mesh pipeline. All geometry
//! tolerances, unit conversions, and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Scaling**: LDraw unit conversion
//! - **Smoothing**: Vertex-normal synthesis parameters
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Position epsilon for normal smoothing adjacency.
///
/// Vertices are never deduplicated, so two vertices are considered to sit on
/// the same corner when their positions differ by less than this tolerance.
/// Measured in LDraw units; smoothing runs on unscaled positions.
///
/// # Example
///
/// ```rust
/// use config::constants::POSITION_WELD_EPSILON;
///
/// fn coincident(a: [f64; 3], b: [f64; 3]) -> bool {
///     let dx = a[0] - b[0];
///     let dy = a[1] - b[1];
///     let dz = a[2] - b[2];
///     dx * dx + dy * dy + dz * dz < POSITION_WELD_EPSILON * POSITION_WELD_EPSILON
/// }
///
/// assert!(coincident([0.0, 0.0, 0.0], [0.00001, 0.0, 0.0]));
/// ```
pub const POSITION_WELD_EPSILON: f64 = 1e-4;

/// Squared cross-product magnitude below which a triangle is degenerate.
///
/// Degenerate triangles cannot produce a meaningful face normal and receive
/// the fallback up normal instead.
pub const DEGENERATE_FACE_EPSILON: f64 = 1e-4;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Linear conversion factor from LDraw units to meters.
///
/// One LDU is 0.4 mm; a standard brick is 20 LDU (8 mm) wide. Applied once
/// by the mesh finalizer, after normal synthesis.
///
/// # Example
///
/// ```rust
/// use config::constants::LDU_TO_METERS;
///
/// let stud_spacing = 20.0 * LDU_TO_METERS;
/// assert!((stud_spacing - 0.008).abs() < 1e-12);
/// ```
pub const LDU_TO_METERS: f64 = 0.0004;

// =============================================================================
// SMOOTHING CONSTANTS
// =============================================================================

/// Default smoothing angle threshold in degrees.
///
/// Face normals meeting at a shared position are blended into one vertex
/// normal when the angle between them is at most this threshold.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SMOOTHING_ANGLE;
///
/// let threshold: Option<f64> = None;
/// let degrees = threshold.unwrap_or(DEFAULT_SMOOTHING_ANGLE);
/// assert_eq!(degrees, 30.0);
/// ```
pub const DEFAULT_SMOOTHING_ANGLE: f64 = 30.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum sub-file nesting depth during resolution.
///
/// The LDraw library has no cycle protection of its own; a self-referential
/// part would otherwise recurse without bound. Exceeding this depth is a
/// recoverable diagnostic, not a fatal error. Official library parts stay
/// well under ten levels.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SUBFILE_DEPTH;
///
/// let depth = 3;
/// assert!(depth < MAX_SUBFILE_DEPTH);
/// ```
pub const MAX_SUBFILE_DEPTH: usize = 64;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
