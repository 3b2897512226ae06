use glam::Mat4;
use super::*;

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_valid_params_accepted() {
    let params = PerspectiveParams::new(60.0, 16.0 / 9.0, 0.1, 100.0).unwrap();

    assert_eq!(params.fov_y_degrees, 60.0);
    assert_eq!(params.aspect, 16.0 / 9.0);
    assert_eq!(params.near, 0.1);
    assert_eq!(params.far, 100.0);
}

#[test]
fn test_fov_must_be_in_open_range() {
    assert!(PerspectiveParams::new(0.0, 1.0, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(180.0, 1.0, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(-45.0, 1.0, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(179.9, 1.0, 0.1, 100.0).is_ok());
}

#[test]
fn test_aspect_must_be_positive() {
    assert!(PerspectiveParams::new(60.0, 0.0, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, -1.5, 0.1, 100.0).is_err());
}

#[test]
fn test_clip_distances_must_be_ordered() {
    assert!(PerspectiveParams::new(60.0, 1.0, 0.0, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, 1.0, -0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, 1.0, 100.0, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, 1.0, 100.0, 0.1).is_err());
}

#[test]
fn test_nan_params_rejected() {
    assert!(PerspectiveParams::new(f32::NAN, 1.0, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, f32::NAN, 0.1, 100.0).is_err());
    assert!(PerspectiveParams::new(60.0, 1.0, f32::NAN, 100.0).is_err());
}

#[test]
fn test_rejection_reports_invalid_projection() {
    let err = PerspectiveParams::new(60.0, 1.0, 5.0, 1.0).unwrap_err();

    assert!(format!("{}", err).contains("Invalid projection"));
}

// ============================================================================
// Matrix derivation
// ============================================================================

#[test]
fn test_matrix_matches_perspective_rh() {
    let params = PerspectiveParams::new(60.0, 16.0 / 9.0, 0.1, 100.0).unwrap();

    let expected = Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(params.matrix(), expected);
}
