/// Frustum — six bounding planes of a camera's visible volume.
///
/// Planes are extracted from a projection matrix (Gribb & Hartmann row
/// combinations) and a world pose, with all normals facing the frustum
/// interior. A point P is inside when every plane reports a
/// non-negative signed distance.
///
/// The caller re-extracts the frustum whenever the projection or the
/// pose changes (in practice once per evaluation tick); a Frustum value
/// is immutable once built and may be shared across threads.

use glam::Mat4;
use crate::camera::{CameraPose, PerspectiveParams};
use super::aabb::Aabb;
use super::plane::Plane;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB straddles the frustum boundary
    Intersect,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes in fixed order: left, right, bottom, top, near, far.
///
/// All normals point inward (toward the visible volume).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes, indexed by the `PLANE_*` constants
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract the six world-space frustum planes from a projection
    /// matrix and a camera pose.
    ///
    /// The projection matrix must be a valid right-handed perspective
    /// projection with the camera looking down -Z in view space, as
    /// produced by `Mat4::perspective_rh` (depth 0..1) or
    /// `Mat4::perspective_rh_gl` (depth -1..1); both depth ranges yield
    /// the same planes. Degenerate matrices are a caller contract
    /// violation.
    ///
    /// `near` and `far` are absolute distances from the eye along the
    /// view direction (the `Mat4::perspective_rh` convention) and must
    /// match the matrix. The four side planes of a perspective frustum
    /// pass through the eye point; the near and far planes are anchored
    /// at `eye + forward * near` and `eye + forward * far`.
    pub fn from_projection_pose(
        projection: &Mat4,
        pose: &CameraPose,
        near: f32,
        far: f32,
    ) -> Self {
        let r0 = projection.row(0);
        let r1 = projection.row(1);
        let r2 = projection.row(2);
        let r3 = projection.row(3);

        // Gribb & Hartmann: each plane is a sum/difference of the
        // homogeneous row and one coordinate row. With a right-handed,
        // -Z-forward projection these combinations face inward directly.
        // The near/far rows contribute direction only; their offsets
        // come from the anchor points below.
        let view_normals = [
            (r3 + r0).truncate(), // left
            (r3 - r0).truncate(), // right
            (r3 + r1).truncate(), // bottom
            (r3 - r1).truncate(), // top
            (r3 + r2).truncate(), // near
            (r3 - r2).truncate(), // far
        ];

        let eye = pose.position;
        let forward = pose.forward();
        let anchors = [
            eye,
            eye,
            eye,
            eye,
            eye + forward * near,
            eye + forward * far,
        ];

        let planes = std::array::from_fn(|i| {
            let world_normal = pose.rotation * view_normals[i].normalize();
            Plane::from_point(world_normal, anchors[i])
        });

        Self { planes }
    }

    /// Extract the frustum planes from fov/aspect/near/far parameters
    /// and a camera pose.
    ///
    /// Derives the equivalent projection matrix and delegates to
    /// [`Frustum::from_projection_pose`]; both modes produce identical
    /// planes for equivalent inputs.
    pub fn from_perspective(params: &PerspectiveParams, pose: &CameraPose) -> Self {
        Self::from_projection_pose(&params.matrix(), pose, params.near, params.far)
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// Positive/negative vertex test, two dot products per plane at
    /// most:
    /// - positive vertex outside any plane → `Outside` (early out; no
    ///   later plane can change the verdict)
    /// - negative vertex outside a plane → the box straddles it; keep
    ///   scanning, a later plane may still prove full exteriority
    /// - neither → the box is interior to this plane
    ///
    /// Exterior tests are strict (`< 0`), so a box touching a plane
    /// exactly is `Inside` or `Intersect`, never `Outside`. A zero-size
    /// box behaves as a point test.
    pub fn classify_aabb(&self, aabb: &Aabb) -> Containment {
        let mut straddles = false;

        for plane in &self.planes {
            if plane.signed_distance(aabb.positive_vertex(plane.normal)) < 0.0 {
                return Containment::Outside;
            }

            if plane.signed_distance(aabb.negative_vertex(plane.normal)) < 0.0 {
                straddles = true;
            }
        }

        if straddles {
            Containment::Intersect
        } else {
            Containment::Inside
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
