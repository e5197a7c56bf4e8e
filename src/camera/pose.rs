use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::host::{CameraRig, CameraSpec};

/// Camera-local forward axis.
pub const FORWARD: Vec3 = Vec3::Z;
/// Camera-local backward axis; the eye sits `distance` along it from the
/// target.
pub const BACK: Vec3 = Vec3::NEG_Z;

/// Smallest distance fed to the zoom logarithm.
pub const MIN_SOLVE_DISTANCE: f32 = 1e-3;

/// Plain copy of the four host camera fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Pitch in degrees, positive looking down.
    pub vertical_angle: f32,
    /// Yaw in degrees.
    pub horizontal_angle: f32,
    /// Logarithmic zoom level.
    pub zoom_level: f32,
    /// Look-at target.
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            vertical_angle: 45.0,
            horizontal_angle: 0.0,
            zoom_level: 0.0,
            target: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    /// Read the current fields from a rig.
    #[must_use]
    pub fn capture(rig: &dyn CameraRig) -> Self {
        Self {
            vertical_angle: rig.vertical_angle(),
            horizontal_angle: rig.horizontal_angle(),
            zoom_level: rig.zoom_level(),
            target: rig.target(),
        }
    }

    /// Write all four fields to a rig.
    pub fn apply(&self, rig: &mut dyn CameraRig) {
        rig.set_vertical_angle(self.vertical_angle);
        rig.set_horizontal_angle(self.horizontal_angle);
        rig.set_zoom_level(self.zoom_level);
        rig.set_target(self.target);
    }

    /// `Euler(vertical, horizontal, 0)`: yaw around world up applied after
    /// pitch around the camera's right axis.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        rotation_from_angles(self.vertical_angle, self.horizontal_angle)
    }

    /// Eye-to-target distance.
    #[must_use]
    pub fn distance(&self, spec: &CameraSpec) -> f32 {
        zoom_distance(spec, self.zoom_level)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self, spec: &CameraSpec) -> Vec3 {
        self.target + self.rotation() * BACK * self.distance(spec)
    }

    /// Whether every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertical_angle.is_finite()
            && self.horizontal_angle.is_finite()
            && self.zoom_level.is_finite()
            && self.target.is_finite()
    }
}

/// Rotation for a pitch/yaw pair in degrees.
#[must_use]
pub fn rotation_from_angles(vertical: f32, horizontal: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        horizontal.to_radians(),
        vertical.to_radians(),
        0.0,
    )
}

/// `zoom_base ^ level * base_distance`.
#[must_use]
pub fn zoom_distance(spec: &CameraSpec, level: f32) -> f32 {
    spec.zoom_base.powf(level) * spec.base_distance
}

/// Inverse of [`zoom_distance`]; distances are clamped to
/// [`MIN_SOLVE_DISTANCE`] before taking the logarithm.
#[must_use]
pub fn zoom_level_for(spec: &CameraSpec, distance: f32) -> f32 {
    let distance = distance.max(MIN_SOLVE_DISTANCE);
    (distance / spec.base_distance).log(spec.zoom_base)
}
