/// Plane — an oriented half-space boundary.
///
/// Stored as a unit normal plus a signed offset `d` so that the plane
/// equation is `dot(normal, p) + d = 0`. Points with a non-negative
/// signed distance are on the interior side; the six frustum planes are
/// built with their normals facing the frustum interior.

use glam::Vec3;

/// An oriented plane in world space.
///
/// The `normal` is expected to have unit length; this is asserted in
/// debug builds only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing toward the interior half-space
    pub normal: Vec3,
    /// Signed offset: `dot(normal, p) + d = 0` for points on the plane
    pub d: f32,
}

impl Plane {
    /// Create a plane from a unit normal and signed offset.
    pub fn new(normal: Vec3, d: f32) -> Self {
        debug_assert!(
            (normal.length() - 1.0).abs() < 1e-4,
            "plane normal must be unit length"
        );
        Self { normal, d }
    }

    /// Create a plane through `point` with the given unit `normal`.
    pub fn from_point(normal: Vec3, point: Vec3) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive on the interior side (the side the normal faces),
    /// negative on the exterior side, zero on the plane.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
