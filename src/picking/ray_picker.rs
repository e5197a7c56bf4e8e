use glam::{IVec3, Vec3};

use super::coordinates::{grid_to_world, world_ray_to_grid};
use crate::camera::ray::{Plane, Ray};
use crate::host::{SelectableRaycaster, TerrainPicker, WaterVisibility};

/// One picking test's outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitCandidate {
    /// World-space hit point, `None` on a miss.
    pub point: Option<Vec3>,
    /// Distance from the ray origin, infinite on a miss.
    pub distance: f32,
}

impl HitCandidate {
    /// No hit.
    pub const MISS: Self = Self {
        point: None,
        distance: f32::INFINITY,
    };

    fn hit(point: Vec3, distance: f32) -> Self {
        Self {
            point: Some(point),
            distance,
        }
    }
}

/// Terrain hit with the tile the pointer hovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainHit {
    /// World-space point where the ray entered the voxel.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    /// The empty grid cell in front of the hit face.
    pub hovered_tile: IVec3,
}

/// Resolves the world point under a ray against the host scene.
///
/// Borrows the scene services for one input tick.
#[derive(Clone, Copy)]
pub struct RayPicker<'a> {
    /// Terrain voxels.
    pub terrain: &'a dyn TerrainPicker,
    /// Buildings, plants and other selectable objects.
    pub selectables: &'a dyn SelectableRaycaster,
    /// Water layer state.
    pub water: &'a dyn WaterVisibility,
}

impl<'a> RayPicker<'a> {
    /// Bundle scene services.
    #[must_use]
    pub fn new(
        terrain: &'a dyn TerrainPicker,
        selectables: &'a dyn SelectableRaycaster,
        water: &'a dyn WaterVisibility,
    ) -> Self {
        Self {
            terrain,
            selectables,
            water,
        }
    }

    /// Whether a voxel stops the pick ray.
    ///
    /// Transparent water only lets terrain through. Opaque water also
    /// stops the ray at underwater cells at or below the highest visible
    /// level.
    #[must_use]
    pub fn is_visible_voxel(&self, coordinates: IVec3) -> bool {
        if self.water.is_water_transparent() {
            return self.terrain.is_terrain_voxel(coordinates);
        }
        (self.water.cell_is_underwater(coordinates)
            && coordinates.z <= self.water.max_visible_level())
            || self.terrain.is_terrain_voxel(coordinates)
    }

    /// First visible voxel along the ray.
    #[must_use]
    pub fn terrain_hit(&self, ray: &Ray) -> Option<TerrainHit> {
        let grid_ray = world_ray_to_grid(ray);
        let predicate = |c: IVec3| self.is_visible_voxel(c);
        let traversed =
            self.terrain.pick_terrain_coordinates(&grid_ray, &predicate)?;
        let point = grid_to_world(traversed.intersection);
        Some(TerrainHit {
            point,
            distance: ray.origin.distance(point),
            hovered_tile: traversed.coordinates + traversed.face,
        })
    }

    /// Nearest selectable object, terrain stumps excluded.
    #[must_use]
    pub fn selectable_hit(&self, ray: &Ray) -> HitCandidate {
        self.selectables
            .try_hit_selectable_object(ray, false)
            .map_or(HitCandidate::MISS, |hit| {
                HitCandidate::hit(hit.point, hit.distance)
            })
    }

    /// World point under the ray, or `None` when neither terrain nor a
    /// selectable object is hit.
    ///
    /// A selectable strictly closer than the terrain wins; on a tie the
    /// terrain is kept. A terrain hit at zero distance (ray starting on the
    /// surface) resolves to the ray origin.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<Vec3> {
        let terrain = self
            .terrain_hit(ray)
            .map_or(HitCandidate::MISS, |hit| {
                HitCandidate::hit(hit.point, hit.distance)
            });
        let selectable = self.selectable_hit(ray);

        if selectable.distance < terrain.distance {
            return selectable.point;
        }
        if terrain.distance > 0.0 {
            return terrain.point;
        }
        Some(ray.origin)
    }

    /// [`pick`](Self::pick) with fallbacks: the ground plane `y = 0`, then
    /// the ray origin.
    #[must_use]
    pub fn world_point(&self, ray: &Ray) -> Vec3 {
        self.pick(ray)
            .or_else(|| Plane::horizontal(0.0).intersect(ray))
            .unwrap_or(ray.origin)
    }
}
