//! Culling module — frustum plane extraction and AABB classification.
//!
//! Two pure operations: derive the six bounding planes of a camera
//! frustum (Frustum::from_projection_pose / from_perspective), and
//! classify a world-space AABB against them (Frustum::classify_aabb).

mod aabb;
mod frustum;
mod plane;

pub use aabb::Aabb;
pub use frustum::{
    Containment, Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use plane::Plane;
