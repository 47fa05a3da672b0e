//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_weld_epsilon_larger_than_epsilon() {
    assert!(
        POSITION_WELD_EPSILON >= EPSILON,
        "POSITION_WELD_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_degenerate_face_epsilon_is_positive() {
    assert!(DEGENERATE_FACE_EPSILON > 0.0);
}

// =============================================================================
// SCALING TESTS
// =============================================================================

#[test]
fn test_ldu_scale_matches_brick_geometry() {
    // A standard brick is 20 LDU = 8 mm wide.
    assert!(approx_equal(20.0 * LDU_TO_METERS, 0.008));
}

// =============================================================================
// SMOOTHING TESTS
// =============================================================================

#[test]
fn test_default_smoothing_angle_in_range() {
    assert!(DEFAULT_SMOOTHING_ANGLE > 0.0);
    assert!(DEFAULT_SMOOTHING_ANGLE < 180.0);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_subfile_depth_covers_library_parts() {
    // Official library parts nest well under ten levels.
    assert!(MAX_SUBFILE_DEPTH >= 16);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-11));
    assert!(!approx_equal(1.0, 1.0001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(0.001));
}
