/// CameraPose — world-space position and orientation of the viewer.
///
/// A passive value type: it computes nothing per frame and is never
/// stored by the library. The camera looks along its local -Z axis
/// (glam right-handed convention), so `forward()` is `rotation * -Z`.

use glam::{Mat3, Quat, Vec3};

/// World-space camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space
    pub position: Vec3,
    /// World orientation. Local axes: +X right, +Y up, -Z forward.
    pub rotation: Quat,
}

impl CameraPose {
    /// Pose at the origin looking down -Z.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` looking toward `target`.
    ///
    /// `up` is a hint; the effective up vector is re-orthogonalized
    /// against the view direction. `target` must not coincide with
    /// `position`, and `up` must not be parallel to the view direction.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        Self {
            position,
            rotation: Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward)),
        }
    }

    /// View direction (local -Z rotated into world space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera right vector (local +X rotated into world space).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera up vector (local +Y rotated into world space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
