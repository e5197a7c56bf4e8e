//! Conversions between world space (Y up) and voxel grid space (Z up).

use glam::Vec3;

use crate::camera::ray::Ray;

/// World point to grid point: grid `(x, y, z)` is world `(x, z, y)`.
#[inline]
#[must_use]
pub fn world_to_grid(point: Vec3) -> Vec3 {
    Vec3::new(point.x, point.z, point.y)
}

/// Grid point to world point; the inverse of [`world_to_grid`].
#[inline]
#[must_use]
pub fn grid_to_world(point: Vec3) -> Vec3 {
    Vec3::new(point.x, point.z, point.y)
}

/// Express a world-space ray in grid space.
#[must_use]
pub fn world_ray_to_grid(ray: &Ray) -> Ray {
    Ray {
        origin: world_to_grid(ray.origin),
        direction: world_to_grid(ray.direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_moves_to_grid_z() {
        let world = Vec3::new(3.0, 7.0, 11.0);
        assert_eq!(world_to_grid(world), Vec3::new(3.0, 11.0, 7.0));
        assert_eq!(grid_to_world(world_to_grid(world)), world);
    }

    #[test]
    fn grid_ray_keeps_unit_direction() {
        let ray = Ray::new(Vec3::new(1.0, 20.0, 2.0), Vec3::new(0.2, -1.0, 0.4));
        let grid = world_ray_to_grid(&ray);
        assert!((grid.direction.length() - 1.0).abs() < 1e-6);
        assert!(grid.direction.z < 0.0);
    }
}
