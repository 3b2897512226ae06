//! Camera module — world pose and projection parameters.
//!
//! Passive data containers for the culling pipeline. The library does
//! NOT store or manage a camera — the caller owns the pose and the
//! projection and supplies both on every frustum extraction.

mod pose;
mod projection;

pub use pose::CameraPose;
pub use projection::PerspectiveParams;
