/// PerspectiveParams — validated fov/aspect/near/far configuration.
///
/// The second frustum extraction mode derives a projection matrix from
/// these parameters. Validation happens once here, at configuration
/// time, so the per-frame extraction path carries no checks.

use glam::Mat4;
use crate::error::{Error, Result};

/// Parameters of a symmetric perspective projection.
///
/// `fov_y_degrees` is the vertical field of view in degrees. `near` and
/// `far` are absolute distances from the eye along the view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view, in degrees. Must be in (0, 180).
    pub fov_y_degrees: f32,
    /// Viewport width / height. Must be positive.
    pub aspect: f32,
    /// Near clip distance from the eye. Must be positive.
    pub near: f32,
    /// Far clip distance from the eye. Must exceed `near`.
    pub far: f32,
}

impl PerspectiveParams {
    /// Validate and build perspective parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if the field of view is not in
    /// (0, 180) degrees, the aspect ratio is not positive, or the clip
    /// distances do not satisfy `0 < near < far`.
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(Error::InvalidProjection(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                fov_y_degrees
            )));
        }
        if !(aspect > 0.0) {
            return Err(Error::InvalidProjection(format!(
                "aspect ratio must be positive, got {}",
                aspect
            )));
        }
        if !(near > 0.0 && far > near) {
            return Err(Error::InvalidProjection(format!(
                "clip distances must satisfy 0 < near < far, got near={} far={}",
                near, far
            )));
        }

        Ok(Self { fov_y_degrees, aspect, near, far })
    }

    /// Equivalent right-handed projection matrix (depth range 0..1).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
