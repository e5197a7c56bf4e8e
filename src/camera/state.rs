//! Computed camera accessors over the host's primitive fields.
//!
//! [`CameraState`] does not own anything: it borrows the host rig for the
//! duration of an input tick and exposes `distance`, `rotation` and
//! `position` derived from the rig's angles, zoom level and target. Setting
//! `position` solves the inverse problem: find a target on the view ray and
//! the zoom level that puts the eye back where it was asked to be.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pose::{
    rotation_from_angles, zoom_distance, zoom_level_for, CameraPose, BACK,
    FORWARD,
};
use super::ray::{Plane, Ray};
use crate::host::{CameraRig, CameraSpec, FloatLimits, MapSize};

/// Offset kept when no map-edge plane is in front of the eye.
const MAP_EDGE_FALLBACK_OFFSET: f32 = 20.0;

/// Margin kept below straight down so yaw stays recoverable.
pub const PITCH_EPSILON: f32 = 0.1;

/// How [`CameraState::set_position`] chooses the target on the view ray.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Ground plane plus four vertical planes just outside the map edges;
    /// the intersection nearest the map centre wins.
    #[default]
    MapEdges,
    /// Stacked horizontal planes at every height level; the highest one
    /// crossed wins.
    HeightPlanes,
}

/// Host constants and derived limits the camera view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraModel {
    /// Host camera spec.
    pub spec: CameraSpec,
    /// Map dimensions.
    pub map: MapSize,
    /// Target selection policy.
    pub policy: BoundaryPolicy,
    /// Allowed pitch range in degrees.
    pub pitch_limits: FloatLimits,
}

impl CameraModel {
    /// Model whose lowest pitch is the host minimum scaled by
    /// `vertical_limit_scale` and whose highest is just short of looking
    /// straight down.
    #[must_use]
    pub fn new(
        spec: CameraSpec,
        map: MapSize,
        policy: BoundaryPolicy,
        vertical_limit_scale: f32,
    ) -> Self {
        let max = 90.0 - PITCH_EPSILON;
        let min = (spec.vertical_angle_limits.min * vertical_limit_scale).min(max);
        Self {
            spec,
            map,
            policy,
            pitch_limits: FloatLimits::new(min, max),
        }
    }
}

/// A view over a [`CameraRig`] with computed accessors.
pub struct CameraState<'a> {
    rig: &'a mut dyn CameraRig,
    model: &'a CameraModel,
}

impl<'a> CameraState<'a> {
    /// Borrow a rig for the duration of one update.
    #[must_use]
    pub fn new(rig: &'a mut dyn CameraRig, model: &'a CameraModel) -> Self {
        Self { rig, model }
    }

    /// Current rig fields.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::capture(&*self.rig)
    }

    /// Eye-to-target distance, `zoom_base ^ zoom_level * base_distance`.
    #[must_use]
    pub fn distance(&self) -> f32 {
        zoom_distance(&self.model.spec, self.rig.zoom_level())
    }

    /// Camera orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        rotation_from_angles(
            self.rig.vertical_angle(),
            self.rig.horizontal_angle(),
        )
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * FORWARD
    }

    /// Set the orientation.
    ///
    /// Pitch is measured as the angle between the view direction and world
    /// up, minus 90°, then clamped to the model's pitch limits. Yaw is the
    /// Y Euler angle normalized to `[0, 360)`. Roll is discarded.
    pub fn set_rotation(&mut self, rotation: Quat) {
        let forward = rotation * FORWARD;
        let vertical = forward.angle_between(Vec3::Y).to_degrees() - 90.0;
        let (yaw, _, _) = rotation.to_euler(glam::EulerRot::YXZ);
        let horizontal = yaw.to_degrees().rem_euclid(360.0);

        if !vertical.is_finite() || !horizontal.is_finite() {
            log::warn!("rejected non-finite camera rotation {rotation:?}");
            return;
        }
        let limits = self.model.pitch_limits;
        self.rig
            .set_vertical_angle(vertical.max(limits.min).min(limits.max));
        self.rig.set_horizontal_angle(horizontal);
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.rig.target() + self.rotation() * BACK * self.distance()
    }

    /// Move the eye to `eye`, keeping the orientation.
    ///
    /// The target becomes the point on the view ray selected by the
    /// model's [`BoundaryPolicy`] and the zoom level is solved from the
    /// distance to it. Non-finite solutions leave the rig untouched.
    pub fn set_position(&mut self, eye: Vec3) {
        let ray = Ray::new(eye, self.forward());
        let (point, offset) = match self.model.policy {
            BoundaryPolicy::MapEdges => self.solve_map_edges(&ray),
            BoundaryPolicy::HeightPlanes => self.solve_height_planes(&ray),
        };
        let zoom_level = zoom_level_for(&self.model.spec, offset);

        if !point.is_finite() || !zoom_level.is_finite() {
            log::warn!(
                "rejected non-finite camera solve for eye {eye} \
                 (target {point}, zoom {zoom_level})"
            );
            return;
        }
        self.rig.set_target(point);
        self.rig.set_zoom_level(zoom_level);
    }

    /// Intersect the ground and the four margin planes, keep the point
    /// nearest the map centre.
    fn solve_map_edges(&self, ray: &Ray) -> (Vec3, f32) {
        let map = &self.model.map;
        let margin = self.model.spec.free_mode_map_margin;
        let center = map.center();
        let planes = [
            Plane::horizontal(0.0),
            Plane::new(Vec3::NEG_X, -margin),
            Plane::new(Vec3::NEG_X, map.width as f32 + margin),
            Plane::new(Vec3::NEG_Z, -margin),
            Plane::new(Vec3::NEG_Z, map.depth as f32 + margin),
        ];

        let mut best = (center, MAP_EDGE_FALLBACK_OFFSET);
        let mut best_distance = f32::INFINITY;
        for plane in &planes {
            let Some(offset) = plane.raycast(ray) else {
                continue;
            };
            let point = ray.point(offset);
            let distance = point.distance(center);
            if distance < best_distance {
                best = (point, offset);
                best_distance = distance;
            }
        }
        best
    }

    /// Scan horizontal planes bottom to top, keep the highest crossing.
    fn solve_height_planes(&self, ray: &Ray) -> (Vec3, f32) {
        let map = &self.model.map;
        let levels = map.max_terrain_height + map.max_height_above_terrain;
        let mut highest = 0.0;
        for level in 0..levels {
            if let Some(offset) = Plane::horizontal(level as f32).raycast(ray)
            {
                highest = offset;
            }
        }
        (ray.point(highest), highest)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::host::simulated::SimulatedCamera;

    fn model(policy: BoundaryPolicy) -> CameraModel {
        CameraModel::new(CameraSpec::default(), MapSize::default(), policy, 0.125)
    }

    fn camera(model: &CameraModel) -> SimulatedCamera {
        let mut camera =
            SimulatedCamera::new(model.spec, Vec2::new(800.0, 600.0), 60.0);
        camera.pose = CameraPose {
            vertical_angle: 50.0,
            horizontal_angle: 30.0,
            zoom_level: 1.0,
            target: Vec3::new(32.0, 0.0, 32.0),
        };
        camera
    }

    #[test]
    fn rotation_round_trips_within_limits() {
        let model = model(BoundaryPolicy::MapEdges);
        let mut rig = camera(&model);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let yaw = rng.random_range(0.0..360.0_f32);
            let pitch = rng.random_range(2.5..89.0_f32);
            let mut state = CameraState::new(&mut rig, &model);
            state.set_rotation(rotation_from_angles(pitch, yaw));
            let before = state.rotation();
            state.set_rotation(before);
            let after = state.rotation();
            // acos near 1 is too coarse for this, compare the dot directly
            assert!(
                before.dot(after).abs() > 1.0 - 1e-6,
                "yaw {yaw} pitch {pitch}: {before:?} vs {after:?}"
            );
            assert!(
                (before * FORWARD).distance(after * FORWARD) < 1e-4,
                "yaw {yaw} pitch {pitch}"
            );
            assert!((rig.pose.vertical_angle - pitch).abs() < 1e-2);
        }
    }

    #[test]
    fn rotation_is_clamped_to_pitch_limits() {
        let model = model(BoundaryPolicy::MapEdges);
        let mut rig = camera(&model);
        let mut state = CameraState::new(&mut rig, &model);
        state.set_rotation(rotation_from_angles(-40.0, 10.0));
        assert!((rig.pose.vertical_angle - 2.5).abs() < 1e-4);
    }

    #[test]
    fn set_position_round_trips_over_map() {
        for policy in [BoundaryPolicy::MapEdges, BoundaryPolicy::HeightPlanes]
        {
            let model = model(policy);
            let mut rig = camera(&model);
            let mut state = CameraState::new(&mut rig, &model);
            let eye = Vec3::new(20.0, 30.0, 18.0);
            state.set_position(eye);
            assert!(
                (state.position() - eye).length() < 1e-2,
                "{policy:?}: {} vs {eye}",
                state.position()
            );
        }
    }

    #[test]
    fn map_edges_target_lands_on_ground() {
        let model = model(BoundaryPolicy::MapEdges);
        let mut rig = camera(&model);
        let mut state = CameraState::new(&mut rig, &model);
        state.set_position(Vec3::new(30.0, 25.0, 10.0));
        assert!(rig.pose.target.y.abs() < 1e-4);
    }

    #[test]
    fn height_planes_pick_highest_crossing() {
        let model = model(BoundaryPolicy::HeightPlanes);
        let mut rig = camera(&model);
        let mut state = CameraState::new(&mut rig, &model);
        // eye above every plane: the top plane (level 23) is crossed first
        state.set_position(Vec3::new(30.0, 60.0, 30.0));
        assert!((rig.pose.target.y - 23.0).abs() < 1e-3);
    }

    #[test]
    fn eye_below_all_planes_never_goes_non_finite() {
        let model = model(BoundaryPolicy::HeightPlanes);
        let mut rig = camera(&model);
        let mut state = CameraState::new(&mut rig, &model);
        state.set_position(Vec3::new(30.0, -10.0, 30.0));
        assert!(rig.pose.is_finite());
    }
}
