//! Camera math over the host's primitive camera fields.
//!
//! The host stores a pitch, a yaw, a logarithmic zoom level and a look-at
//! target. [`CameraState`] turns those into distance, rotation and eye
//! position and back again.

/// Plain copies of the host fields and the zoom curve.
pub mod pose;
/// Ray and plane primitives.
pub mod ray;
mod state;

pub use pose::CameraPose;
pub use state::{BoundaryPolicy, CameraModel, CameraState, PITCH_EPSILON};
