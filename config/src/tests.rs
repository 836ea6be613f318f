//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between the configuration
//! constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_double_prec_matches_machine_epsilon() {
    assert_eq!(DOUBLE_PREC, f64::EPSILON);
}

#[test]
fn test_automatic_tolerance_scale_is_positive() {
    assert!(AUTOMATIC_TOLERANCE_SCALE > 0.0);
}

// =============================================================================
// TOLERANCE MULTIPLE TESTS
// =============================================================================

#[test]
fn test_degeneracy_scale_exceeds_point_check_scale() {
    // Degeneracy rejection must be stricter than the containment slack
    assert!(DEGENERACY_SCALE > POINT_CHECK_SCALE);
}

#[test]
fn test_early_exit_scale_is_large() {
    assert!(CLAIM_EARLY_EXIT_SCALE >= 100.0);
}

#[test]
fn test_min_area_scale_is_positive() {
    assert!(MIN_AREA_SCALE > 0.0);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_hull_points_spans_a_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, 4);
}
