use glam::{Quat, Vec2, Vec3};

use super::crosshair::Crosshair;
use super::gesture::{Gesture, NavMode, OrbitGesture, PanGesture};
use crate::camera::pose::{zoom_distance, FORWARD};
use crate::camera::ray::Plane;
use crate::camera::{CameraModel, CameraState};
use crate::host::{CameraRig, CameraSpec, MapSize, SpecSource};
use crate::input::FrameInput;
use crate::options::{NavigationOptions, Options};
use crate::picking::RayPicker;

/// Pointer-driven camera state machine: pan, orbit and zoom to cursor.
///
/// One instance per host camera. Call [`process_input`](Self::process_input)
/// once per input tick; the navigator keeps only the snapshot of the gesture
/// in progress and writes everything else straight to the rig.
#[derive(Debug, Clone)]
pub struct Navigator {
    options: NavigationOptions,
    model: CameraModel,
    gesture: Option<Gesture>,
    crosshair: Option<Crosshair>,
}

impl Navigator {
    /// Navigator for a host with the given camera constants and map.
    #[must_use]
    pub fn new(options: &Options, spec: CameraSpec, map: MapSize) -> Self {
        let nav = options.navigation.clone();
        let model = CameraModel::new(
            spec,
            map,
            nav.boundary_policy,
            nav.vertical_limit_scale,
        );
        Self {
            options: nav,
            model,
            gesture: None,
            crosshair: options.debug.show_crosshair.then(Crosshair::default),
        }
    }

    /// Read the host spec data once and build a navigator for it.
    #[must_use]
    pub fn load(options: &Options, source: &dyn SpecSource) -> Self {
        let spec = source.camera_spec();
        let map = source.map_size();
        log::info!(
            "navigation loaded for {}x{} map, zoom base {}, pitch {:.2}..{:.2}",
            map.width,
            map.depth,
            spec.zoom_base,
            spec.vertical_angle_limits.min * options.navigation.vertical_limit_scale,
            90.0 - crate::camera::PITCH_EPSILON,
        );
        Self::new(options, spec, map)
    }

    /// Host constants and limits in use.
    #[must_use]
    pub fn model(&self) -> &CameraModel {
        &self.model
    }

    /// Mode of the gesture in progress.
    #[must_use]
    pub fn mode(&self) -> NavMode {
        self.gesture.map_or(NavMode::Idle, |g| g.mode())
    }

    /// Snapshot of the gesture in progress.
    #[must_use]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Debug crosshair, present when enabled in the options.
    #[must_use]
    pub fn crosshair(&self) -> Option<&Crosshair> {
        self.crosshair.as_ref()
    }

    /// Run one input tick.
    ///
    /// Always returns `false`: navigation never consumes input, so other
    /// host input processors still see it.
    pub fn process_input(
        &mut self,
        input: &FrameInput,
        rig: &mut dyn CameraRig,
        picker: &RayPicker<'_>,
    ) -> bool {
        let ray = rig.screen_point_to_ray(input.pointer);
        let world_point = picker.world_point(&ray);
        if let Some(crosshair) = &mut self.crosshair {
            crosshair.follow(world_point);
        }

        match NavMode::classify(input) {
            NavMode::Idle => {
                if let Some(gesture) = self.gesture.take() {
                    log::debug!("{:?} ended", gesture.mode());
                }
            }
            NavMode::Orbit => self.orbit(input.pointer, world_point, rig),
            NavMode::Pan => self.pan(input.pointer, world_point, rig),
        }

        self.zoom(input, world_point, rig);
        false
    }

    /// Snapshot of the running gesture if it serves `mode` and is still
    /// usable.
    fn continuing(&self, mode: NavMode) -> Option<Gesture> {
        self.gesture.filter(|g| g.mode() == mode && g.is_usable())
    }

    fn orbit(&mut self, screen: Vec2, world_point: Vec3, rig: &mut dyn CameraRig) {
        let mut state = CameraState::new(rig, &self.model);
        let Some(Gesture::Orbit(orbit)) = self.continuing(NavMode::Orbit) else {
            let orbit = OrbitGesture {
                origin_world_point: world_point,
                origin_screen_point: screen,
                origin_camera_position: state.position(),
                origin_camera_rotation: state.rotation(),
            };
            log::debug!("orbit started around {world_point}");
            self.gesture = Some(Gesture::Orbit(orbit));
            return;
        };

        let delta = screen - orbit.origin_screen_point;
        let sensitivity = self.options.orbit_sensitivity;
        let original = orbit.origin_camera_rotation;
        let original_pitch = pitch_of(original);
        let limits = self.model.pitch_limits;
        let yaw_delta = delta.x * sensitivity;
        let pitch_delta = (-delta.y * sensitivity)
            .max(limits.min - original_pitch)
            .min(limits.max - original_pitch);

        state.set_rotation(
            Quat::from_rotation_y(yaw_delta.to_radians())
                * original
                * Quat::from_rotation_x(pitch_delta.to_radians()),
        );

        // re-read so a clamped rotation still keeps the pivot fixed
        let applied = state.rotation() * original.inverse();
        let pivot = orbit.origin_world_point;
        state.set_position(
            applied * (orbit.origin_camera_position - pivot) + pivot,
        );
    }

    fn pan(&mut self, screen: Vec2, world_point: Vec3, rig: &mut dyn CameraRig) {
        let Some(Gesture::Pan(pan)) = self.continuing(NavMode::Pan) else {
            let state = CameraState::new(rig, &self.model);
            let pan = PanGesture {
                plane: Plane::from_normal_and_point(Vec3::Y, world_point),
                origin_camera_position: state.position(),
                origin_camera_target: state.pose().target,
                origin_screen_point: screen,
            };
            log::debug!("pan started on plane y = {}", world_point.y);
            self.gesture = Some(Gesture::Pan(pan));
            return;
        };

        let current = pan.plane.intersect(&rig.screen_point_to_ray(screen));
        let original = pan
            .plane
            .intersect(&rig.screen_point_to_ray(pan.origin_screen_point));
        let (Some(current), Some(original)) = (current, original) else {
            return;
        };

        let mut state = CameraState::new(rig, &self.model);
        state.set_position(pan.origin_camera_position + (original - current));
    }

    fn zoom(&self, input: &FrameInput, world_point: Vec3, rig: &mut dyn CameraRig) {
        if input.over_ui || input.zoom_delta == 0.0 {
            return;
        }
        let mut state = CameraState::new(rig, &self.model);
        let spec = &self.model.spec;
        let distance = state.distance();
        let max_distance = zoom_distance(
            spec,
            spec.zoom_limits.max * self.options.max_zoom_scale,
        );
        let factor = (1.0 - input.zoom_delta * self.options.zoom_speed)
            .max(self.options.min_distance / distance)
            .min(max_distance / distance);

        let position = state.position();
        state.set_position(world_point + (position - world_point) * factor);
    }
}

/// Pitch in degrees of a rotation, positive looking down.
fn pitch_of(rotation: Quat) -> f32 {
    (rotation * FORWARD).angle_between(Vec3::Y).to_degrees() - 90.0
}
