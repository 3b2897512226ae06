use glam::{Quat, Vec3};
use super::*;

fn assert_vec3_eq(a: Vec3, b: Vec3) {
    assert!(
        (a - b).length() < 1e-5,
        "expected {:?} to equal {:?}",
        a,
        b
    );
}

// ============================================================================
// Basis vectors
// ============================================================================

#[test]
fn test_identity_pose_basis() {
    let pose = CameraPose::IDENTITY;

    assert_vec3_eq(pose.forward(), Vec3::NEG_Z);
    assert_vec3_eq(pose.right(), Vec3::X);
    assert_vec3_eq(pose.up(), Vec3::Y);
}

#[test]
fn test_yaw_rotation_turns_forward() {
    // 90 degrees about +Y turns -Z forward onto -X
    let pose = CameraPose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

    assert_vec3_eq(pose.forward(), Vec3::NEG_X);
    assert_vec3_eq(pose.right(), Vec3::NEG_Z);
    assert_vec3_eq(pose.up(), Vec3::Y);
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_faces_target() {
    let position = Vec3::new(3.0, 2.0, -5.0);
    let target = Vec3::new(-1.0, 4.0, 7.0);
    let pose = CameraPose::look_at(position, target, Vec3::Y);

    assert_eq!(pose.position, position);
    assert_vec3_eq(pose.forward(), (target - position).normalize());
}

#[test]
fn test_look_at_down_positive_z() {
    // Turning the camera around: forward +Z keeps +Y up, right becomes -X
    let pose = CameraPose::look_at(Vec3::ZERO, Vec3::Z, Vec3::Y);

    assert_vec3_eq(pose.forward(), Vec3::Z);
    assert_vec3_eq(pose.up(), Vec3::Y);
    assert_vec3_eq(pose.right(), Vec3::NEG_X);
}

#[test]
fn test_look_at_basis_is_orthonormal() {
    let pose = CameraPose::look_at(
        Vec3::new(10.0, -3.0, 2.0),
        Vec3::new(0.0, 5.0, -8.0),
        Vec3::Y,
    );

    let (f, r, u) = (pose.forward(), pose.right(), pose.up());

    assert!((f.length() - 1.0).abs() < 1e-5);
    assert!((r.length() - 1.0).abs() < 1e-5);
    assert!((u.length() - 1.0).abs() < 1e-5);
    assert!(f.dot(r).abs() < 1e-5);
    assert!(f.dot(u).abs() < 1e-5);
    assert!(r.dot(u).abs() < 1e-5);
}

#[test]
fn test_look_at_reorthogonalizes_up_hint() {
    // An up hint that is not perpendicular to the view direction still
    // produces a proper basis
    let pose = CameraPose::look_at(
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, -1.0),
        Vec3::Y,
    );

    assert!((pose.up().length() - 1.0).abs() < 1e-5);
    assert!(pose.forward().dot(pose.up()).abs() < 1e-5);
}
