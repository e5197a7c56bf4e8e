use glam::{Quat, Vec2, Vec3};
use serde::Serialize;

use crate::camera::ray::Plane;
use crate::input::FrameInput;

/// Which gesture the current input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavMode {
    /// No navigation button held.
    #[default]
    Idle,
    /// Drag the ground under the pointer.
    Pan,
    /// Rotate around the picked point.
    Orbit,
}

impl NavMode {
    /// Classify a frame's input.
    ///
    /// Rotate, or move with the orbit modifier, orbits. Move alone pans.
    #[must_use]
    pub fn classify(input: &FrameInput) -> Self {
        if input.rotate_held || (input.move_held && input.orbit_modifier_held)
        {
            Self::Orbit
        } else if input.move_held {
            Self::Pan
        } else {
            Self::Idle
        }
    }
}

/// Snapshot taken when an orbit starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGesture {
    /// Pivot: the world point under the pointer at the start.
    pub origin_world_point: Vec3,
    /// Pointer position at the start.
    pub origin_screen_point: Vec2,
    /// Eye position at the start.
    pub origin_camera_position: Vec3,
    /// Camera orientation at the start.
    pub origin_camera_rotation: Quat,
}

/// Snapshot taken when a pan starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Horizontal plane through the picked point.
    pub plane: Plane,
    /// Eye position at the start.
    pub origin_camera_position: Vec3,
    /// Look-at target at the start.
    pub origin_camera_target: Vec3,
    /// Pointer position at the start.
    pub origin_screen_point: Vec2,
}

/// An active gesture with its start snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Orbiting.
    Orbit(OrbitGesture),
    /// Panning.
    Pan(PanGesture),
}

impl Gesture {
    /// Mode this gesture serves.
    #[must_use]
    pub fn mode(&self) -> NavMode {
        match self {
            Self::Orbit(_) => NavMode::Orbit,
            Self::Pan(_) => NavMode::Pan,
        }
    }

    /// Whether the snapshot can drive the gesture. A snapshot taken from a
    /// degenerate camera is discarded and the gesture restarts.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Orbit(o) => {
                o.origin_world_point.is_finite()
                    && o.origin_screen_point.is_finite()
                    && o.origin_camera_position.is_finite()
                    && o.origin_camera_rotation.is_finite()
            }
            Self::Pan(p) => {
                p.plane.normal != Vec3::ZERO
                    && p.plane.distance.is_finite()
                    && p.origin_camera_position.is_finite()
                    && p.origin_screen_point.is_finite()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(move_held: bool, rotate_held: bool, modifier: bool) -> FrameInput {
        FrameInput {
            move_held,
            rotate_held,
            orbit_modifier_held: modifier,
            ..FrameInput::default()
        }
    }

    #[test]
    fn classification_priority() {
        assert_eq!(NavMode::classify(&input(false, false, false)), NavMode::Idle);
        assert_eq!(NavMode::classify(&input(true, false, false)), NavMode::Pan);
        assert_eq!(NavMode::classify(&input(true, false, true)), NavMode::Orbit);
        assert_eq!(NavMode::classify(&input(false, true, false)), NavMode::Orbit);
        assert_eq!(NavMode::classify(&input(true, true, false)), NavMode::Orbit);
        // the modifier alone does nothing
        assert_eq!(NavMode::classify(&input(false, false, true)), NavMode::Idle);
    }

    #[test]
    fn degenerate_snapshot_is_not_usable() {
        let pan = Gesture::Pan(PanGesture {
            plane: Plane::horizontal(2.0),
            origin_camera_position: Vec3::new(0.0, f32::NAN, 0.0),
            origin_camera_target: Vec3::ZERO,
            origin_screen_point: Vec2::ZERO,
        });
        assert_eq!(pan.mode(), NavMode::Pan);
        assert!(!pan.is_usable());
    }
}
