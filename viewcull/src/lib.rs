/*!
# Viewcull

Three-state frustum culling for axis-aligned bounding boxes.

This crate implements the classic "positive/negative vertex" visibility
test: the six half-space planes bounding a camera frustum are extracted
from a projection matrix (or fov/aspect/near/far parameters) plus a world
pose, and each AABB is classified against them as fully outside, fully
inside, or straddling the boundary.

## Architecture

- **CameraPose**: world-space camera position + orientation
- **PerspectiveParams**: validated fov/aspect/near/far configuration
- **Frustum**: six ordered planes, extracted per evaluation cycle
- **Containment**: the three-valued classification result

The crate stores no camera and owns no scene. The caller supplies the
current projection and pose on every extraction and reads each subject's
world-space bounds at classification time; both operations are pure
functions, so one `Frustum` may be shared across threads freely.
*/

// Internal modules
mod error;
pub mod camera;
pub mod culling;
pub mod log;

pub use error::{Error, Result};

pub use camera::{CameraPose, PerspectiveParams};
pub use culling::{
    Aabb, Containment, Frustum, Plane,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};

// Re-export math library at crate root
pub use glam;
