use glam::{IVec3, Vec2, Vec3};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{
    CameraRig, CameraSpec, Host, HostParts, MapSize, RaycastHit,
    SelectableRaycaster, SpecSource, TerrainPicker, WaterVisibility,
};
use crate::camera::pose::CameraPose;
use crate::camera::ray::Ray;
use crate::input::InputTracker;
use crate::picking::RayPicker;

/// Pinhole camera storing the four host fields verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCamera {
    /// Current camera fields.
    pub pose: CameraPose,
    /// Zoom curve used to place the eye.
    pub spec: CameraSpec,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
}

impl SimulatedCamera {
    /// Camera with the default pose.
    #[must_use]
    pub fn new(spec: CameraSpec, viewport: Vec2, fov_y: f32) -> Self {
        Self {
            pose: CameraPose::default(),
            spec,
            viewport,
            fov_y,
        }
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.pose.position(&self.spec)
    }
}

impl CameraRig for SimulatedCamera {
    fn vertical_angle(&self) -> f32 {
        self.pose.vertical_angle
    }

    fn set_vertical_angle(&mut self, degrees: f32) {
        self.pose.vertical_angle = degrees;
    }

    fn horizontal_angle(&self) -> f32 {
        self.pose.horizontal_angle
    }

    fn set_horizontal_angle(&mut self, degrees: f32) {
        self.pose.horizontal_angle = degrees;
    }

    fn zoom_level(&self) -> f32 {
        self.pose.zoom_level
    }

    fn set_zoom_level(&mut self, level: f32) {
        self.pose.zoom_level = level;
    }

    fn target(&self) -> Vec3 {
        self.pose.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.pose.target = target;
    }

    fn screen_point_to_ray(&self, screen_point: Vec2) -> Ray {
        let viewport = self.viewport.max(Vec2::ONE);
        let ndc = screen_point / viewport * 2.0 - Vec2::ONE;
        let aspect = viewport.x / viewport.y;
        let half_height = (self.fov_y.to_radians() * 0.5).tan();
        let local = Vec3::new(
            ndc.x * aspect * half_height,
            ndc.y * half_height,
            1.0,
        );
        Ray::new(self.eye(), self.pose.rotation() * local)
    }
}

/// Sparse voxel terrain.
#[derive(Debug, Clone, Default)]
pub struct VoxelTerrain {
    map: MapSize,
    solid: FxHashSet<IVec3>,
}

impl VoxelTerrain {
    /// Empty terrain over `map`.
    #[must_use]
    pub fn new(map: MapSize) -> Self {
        Self {
            map,
            solid: FxHashSet::default(),
        }
    }

    /// Terrain filled up to `height` levels everywhere.
    #[must_use]
    pub fn flat(map: MapSize, height: i32) -> Self {
        let mut terrain = Self::new(map);
        for x in 0..map.width {
            for y in 0..map.depth {
                terrain.set_column(x, y, height);
            }
        }
        terrain
    }

    /// Replace the column at grid `(x, y)` with `height` solid levels.
    pub fn set_column(&mut self, x: i32, y: i32, height: i32) {
        let levels = self.map.grid_size().z;
        for z in 0..levels {
            let cell = IVec3::new(x, y, z);
            if z < height {
                let _ = self.solid.insert(cell);
            } else {
                let _ = self.solid.remove(&cell);
            }
        }
    }

    /// Number of solid voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solid.len()
    }

    /// Whether the terrain holds no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }
}

impl TerrainPicker for VoxelTerrain {
    fn size(&self) -> IVec3 {
        self.map.grid_size()
    }

    fn is_terrain_voxel(&self, coordinates: IVec3) -> bool {
        self.solid.contains(&coordinates)
    }
}

/// Water layer with an explicit set of flooded cells.
#[derive(Debug, Clone)]
pub struct SimulatedWater {
    /// Whether water is rendered transparent.
    pub transparent: bool,
    /// Highest level shown by the level-visibility tool.
    pub max_visible_level: i32,
    cells: FxHashSet<IVec3>,
}

impl Default for SimulatedWater {
    fn default() -> Self {
        Self {
            transparent: false,
            max_visible_level: i32::MAX,
            cells: FxHashSet::default(),
        }
    }
}

impl SimulatedWater {
    /// Mark a grid cell as underwater.
    pub fn flood(&mut self, coordinates: IVec3) {
        let _ = self.cells.insert(coordinates);
    }
}

impl WaterVisibility for SimulatedWater {
    fn is_water_transparent(&self) -> bool {
        self.transparent
    }

    fn cell_is_underwater(&self, coordinates: IVec3) -> bool {
        self.cells.contains(&coordinates)
    }

    fn max_visible_level(&self) -> i32 {
        self.max_visible_level
    }
}

/// Axis-aligned box standing in for a selectable scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectableBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
    /// Stumps are only hit when the query includes them.
    #[serde(default)]
    pub stump: bool,
}

impl SelectableBox {
    /// Slab test; distance to the entry point, or zero when the origin is
    /// inside the box.
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            if dir == 0.0 {
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (self.min[axis] - origin) / dir;
            let t2 = (self.max[axis] - origin) / dir;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }
        (t_far >= t_near && t_far >= 0.0).then(|| t_near.max(0.0))
    }
}

/// Physics stand-in: a list of boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxSelectables {
    boxes: Vec<SelectableBox>,
}

impl BoxSelectables {
    /// Add a selectable box.
    pub fn add(&mut self, min: Vec3, max: Vec3) {
        self.boxes.push(SelectableBox {
            min,
            max,
            stump: false,
        });
    }

    /// Add a terrain stump.
    pub fn add_stump(&mut self, min: Vec3, max: Vec3) {
        self.boxes.push(SelectableBox {
            min,
            max,
            stump: true,
        });
    }

    /// Add a prebuilt box.
    pub fn push(&mut self, selectable: SelectableBox) {
        self.boxes.push(selectable);
    }
}

impl SelectableRaycaster for BoxSelectables {
    fn try_hit_selectable_object(
        &self,
        ray: &Ray,
        include_terrain_stump: bool,
    ) -> Option<RaycastHit> {
        self.boxes
            .iter()
            .filter(|b| include_terrain_stump || !b.stump)
            .filter_map(|b| b.raycast(ray))
            .min_by(f32::total_cmp)
            .map(|distance| RaycastHit {
                point: ray.point(distance),
                distance,
            })
    }
}

/// A complete in-memory host.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    /// Host camera.
    pub camera: SimulatedCamera,
    /// Terrain voxels.
    pub terrain: VoxelTerrain,
    /// Selectable objects.
    pub selectables: BoxSelectables,
    /// Water layer.
    pub water: SimulatedWater,
    /// Pointer and button state.
    pub input: InputTracker,
    map: MapSize,
}

impl SimulatedHost {
    /// Host over `map` with empty terrain and a default camera looking at
    /// the map centre.
    #[must_use]
    pub fn new(spec: CameraSpec, map: MapSize, viewport: Vec2) -> Self {
        let mut camera = SimulatedCamera::new(spec, viewport, 60.0);
        camera.pose.target = map.center();
        Self {
            camera,
            terrain: VoxelTerrain::new(map),
            selectables: BoxSelectables::default(),
            water: SimulatedWater::default(),
            input: InputTracker::default(),
            map,
        }
    }
}

impl SpecSource for SimulatedHost {
    fn camera_spec(&self) -> CameraSpec {
        self.camera.spec
    }

    fn map_size(&self) -> MapSize {
        self.map
    }
}

impl Host for SimulatedHost {
    fn parts(&mut self) -> HostParts<'_> {
        HostParts {
            input: self.input.frame(),
            rig: &mut self.camera,
            picker: RayPicker::new(
                &self.terrain,
                &self.selectables,
                &self.water,
            ),
        }
    }

    fn end_frame(&mut self) {
        self.input.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> SimulatedCamera {
        let mut camera = SimulatedCamera::new(
            CameraSpec::default(),
            Vec2::new(800.0, 600.0),
            60.0,
        );
        camera.pose = CameraPose {
            vertical_angle: 90.0,
            horizontal_angle: 0.0,
            zoom_level: 0.0,
            target: Vec3::new(10.0, 0.0, 10.0),
        };
        camera
    }

    #[test]
    fn centre_ray_passes_through_target() {
        let camera = camera();
        let ray = camera.screen_point_to_ray(Vec2::new(400.0, 300.0));
        let hit = ray.point(camera.eye().distance(camera.pose.target));
        assert!((hit - camera.pose.target).length() < 1e-3);
    }

    #[test]
    fn screen_axes_follow_camera_axes() {
        let camera = camera();
        let center = camera.screen_point_to_ray(Vec2::new(400.0, 300.0));
        let right = camera.screen_point_to_ray(Vec2::new(700.0, 300.0));
        let top = camera.screen_point_to_ray(Vec2::new(400.0, 550.0));
        // looking straight down with yaw 0: screen right is +X, screen up
        // is +Z
        assert!(right.direction.x > center.direction.x);
        assert!(top.direction.z > center.direction.z);
    }

    #[test]
    fn set_column_replaces_levels() {
        let map = MapSize::default();
        let mut terrain = VoxelTerrain::flat(map, 3);
        assert_eq!(terrain.len(), (map.width * map.depth * 3) as usize);
        terrain.set_column(0, 0, 1);
        assert!(terrain.is_terrain_voxel(IVec3::new(0, 0, 0)));
        assert!(!terrain.is_terrain_voxel(IVec3::new(0, 0, 1)));
    }

    #[test]
    fn nearest_box_is_hit() {
        let mut selectables = BoxSelectables::default();
        selectables.add(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        selectables.add(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 4.0, 1.0));
        let ray = Ray::new(Vec3::new(0.5, 10.0, 0.5), Vec3::NEG_Y);
        let hit = selectables.try_hit_selectable_object(&ray, false).unwrap();
        assert!((hit.distance - 6.0).abs() < 1e-5);
        assert!((hit.point.y - 4.0).abs() < 1e-5);
    }
}
