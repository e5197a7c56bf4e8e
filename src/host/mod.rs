//! Host collaborator traits.
//!
//! The navigation core never owns the camera, the terrain or the scene.
//! Everything it reads or mutates is reached through the traits in this
//! module, which a host integration implements on top of its own services.
//! [`simulated`] provides a self-contained implementation used by the
//! replay binary and the tests.

/// Self-contained host: pinhole camera, voxel terrain, box selectables.
pub mod simulated;

use glam::{IVec3, Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ray::Ray;
use crate::input::FrameInput;
use crate::picking::traversal;
use crate::picking::RayPicker;

/// Inclusive `[min, max]` range read from host spec data.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct FloatLimits {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl FloatLimits {
    /// Create a range from its bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Camera constants the host loads from its spec data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CameraSpec {
    /// Base of the exponential zoom curve.
    pub zoom_base: f32,
    /// Camera distance at zoom level 0.
    pub base_distance: f32,
    /// Host vertical angle limits in degrees.
    pub vertical_angle_limits: FloatLimits,
    /// Zoom level limits of the host's unrestricted (map editor) mode.
    pub zoom_limits: FloatLimits,
    /// Distance the free camera may travel past the map edges.
    pub free_mode_map_margin: f32,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            zoom_base: 1.4,
            base_distance: 20.0,
            vertical_angle_limits: FloatLimits::new(20.0, 80.0),
            zoom_limits: FloatLimits::new(-2.5, 5.0),
            free_mode_map_margin: 8.0,
        }
    }
}

/// Map dimensions in world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MapSize {
    /// Extent along world X.
    pub width: i32,
    /// Extent along world Z.
    pub depth: i32,
    /// Highest terrain level.
    pub max_terrain_height: i32,
    /// Buildable height above the highest terrain level.
    pub max_height_above_terrain: i32,
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: 64,
            depth: 64,
            max_terrain_height: 16,
            max_height_above_terrain: 8,
        }
    }
}

impl MapSize {
    /// Centre of the map on the ground plane.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.width as f32 * 0.5, 0.0, self.depth as f32 * 0.5)
    }

    /// Voxel grid extent (`x`, `y` = world Z, `z` = height).
    #[must_use]
    pub fn grid_size(&self) -> IVec3 {
        IVec3::new(
            self.width,
            self.depth,
            self.max_terrain_height + self.max_height_above_terrain,
        )
    }
}

/// A voxel reached by grid traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversedCoordinates {
    /// The voxel that satisfied the predicate.
    pub coordinates: IVec3,
    /// Outward normal of the face the ray entered through (zero when the
    /// ray started inside the voxel).
    pub face: IVec3,
    /// Grid-space point where the ray entered the voxel.
    pub intersection: Vec3,
}

/// Result of a physics raycast against a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// World-space hit point.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// The host's camera: primitive orientation/zoom/target fields plus its
/// projection.
///
/// Angles are in degrees. Implementations store the values as given; all
/// validation happens in [`CameraState`](crate::camera::CameraState).
pub trait CameraRig {
    /// Pitch in degrees, positive looking down.
    fn vertical_angle(&self) -> f32;
    /// Set the pitch in degrees.
    fn set_vertical_angle(&mut self, degrees: f32);
    /// Yaw in degrees around world up.
    fn horizontal_angle(&self) -> f32;
    /// Set the yaw in degrees.
    fn set_horizontal_angle(&mut self, degrees: f32);
    /// Logarithmic zoom level.
    fn zoom_level(&self) -> f32;
    /// Set the zoom level.
    fn set_zoom_level(&mut self, level: f32);
    /// Point the camera orbits and looks at.
    fn target(&self) -> Vec3;
    /// Set the look-at target.
    fn set_target(&mut self, target: Vec3);
    /// World-space ray through a screen point (pixels, origin bottom-left).
    fn screen_point_to_ray(&self, screen_point: Vec2) -> Ray;
}

/// Terrain voxel queries.
pub trait TerrainPicker {
    /// Grid extent; voxels live in `[0, size)` on every axis.
    fn size(&self) -> IVec3;

    /// Whether the voxel holds real terrain.
    fn is_terrain_voxel(&self, coordinates: IVec3) -> bool;

    /// First voxel along a grid-space ray accepted by `is_solid`.
    ///
    /// The default walks the grid with [`traversal::traverse`]; hosts with
    /// their own traversal override it.
    fn pick_terrain_coordinates(
        &self,
        grid_ray: &Ray,
        is_solid: &dyn Fn(IVec3) -> bool,
    ) -> Option<TraversedCoordinates> {
        traversal::traverse(grid_ray, self.size(), is_solid)
    }
}

/// Raycasts against selectable scene objects (buildings, plants, ...).
pub trait SelectableRaycaster {
    /// Nearest selectable object hit by a world-space ray.
    fn try_hit_selectable_object(
        &self,
        ray: &Ray,
        include_terrain_stump: bool,
    ) -> Option<RaycastHit>;
}

/// Water rendering state.
pub trait WaterVisibility {
    /// Whether the water layer is currently hidden (rendered transparent).
    fn is_water_transparent(&self) -> bool;
    /// Whether the grid cell is covered by water.
    fn cell_is_underwater(&self, coordinates: IVec3) -> bool;
    /// Highest height level currently shown by the level-visibility tool.
    fn max_visible_level(&self) -> i32;
}

/// Host spec data, read once at load time.
pub trait SpecSource {
    /// Camera constants.
    fn camera_spec(&self) -> CameraSpec;
    /// Current map dimensions.
    fn map_size(&self) -> MapSize;
}

/// Borrowed view of a host, split so the camera can be mutated while the
/// scene is queried.
pub struct HostParts<'a> {
    /// Input sampled for this frame.
    pub input: FrameInput,
    /// The host camera.
    pub rig: &'a mut dyn CameraRig,
    /// Scene services used for picking.
    pub picker: RayPicker<'a>,
}

/// A complete host: spec data plus a per-frame split into camera, input
/// and scene services.
pub trait Host: SpecSource {
    /// Borrow the parts needed for one input tick.
    fn parts(&mut self) -> HostParts<'_>;

    /// Called once the tick's input has been handled, e.g. to clear
    /// per-frame scroll.
    fn end_frame(&mut self) {}
}
