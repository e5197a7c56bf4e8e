//! Rays and planes for picking and camera solving.
//!
//! Planes use the `n · p + d = 0` form so that the boundary planes used by
//! the camera solve can be written directly from a normal and an offset.

use glam::Vec3;

/// Dot products smaller than this are treated as "ray parallel to plane".
const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line in world (or grid) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// A zero direction stays zero; such a ray never intersects anything.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    #[must_use]
    pub fn point(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A plane in 3D space, `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed offset from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and offset, normalizing the normal.
    #[must_use]
    pub fn new(normal: Vec3, distance: f32) -> Self {
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: distance / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Plane with the given normal passing through `point`.
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Horizontal plane `y = height` facing up.
    #[must_use]
    pub fn horizontal(height: f32) -> Self {
        Self {
            normal: Vec3::Y,
            distance: -height,
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Distance along `ray` to the plane, if the ray hits it in front of its
    /// origin.
    ///
    /// Parallel rays, hits behind the origin, hits exactly at the origin and
    /// non-finite results all report `None`.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let along = ray.direction.dot(self.normal);
        if along.abs() < PARALLEL_EPSILON {
            return None;
        }
        let enter = -self.distance_to_point(ray.origin) / along;
        (enter > 0.0 && enter.is_finite()).then_some(enter)
    }

    /// Point where `ray` enters the plane, see [`Plane::raycast`].
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|t| ray.point(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.point(5.0) - Vec3::new(0.0, -3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn downward_ray_hits_ground() {
        let ray = Ray::new(Vec3::new(2.0, 10.0, 3.0), Vec3::NEG_Y);
        let ground = Plane::horizontal(0.0);
        assert_eq!(ground.raycast(&ray), Some(10.0));
        assert_eq!(ground.intersect(&ray), Some(Vec3::new(2.0, 0.0, 3.0)));
    }

    #[test]
    fn parallel_and_backward_rays_miss() {
        let ground = Plane::horizontal(0.0);
        let flat = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        let upward = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert_eq!(ground.raycast(&flat), None);
        assert_eq!(ground.raycast(&upward), None);
    }

    #[test]
    fn plane_through_point_contains_it() {
        let point = Vec3::new(4.0, 7.5, -2.0);
        let plane = Plane::from_normal_and_point(Vec3::Y, point);
        assert!(plane.distance_to_point(point).abs() < 1e-6);
        assert_eq!(plane, Plane::horizontal(7.5));
    }

    #[test]
    fn boundary_plane_offsets() {
        // x = -8 expressed with a -X normal
        let plane = Plane::new(Vec3::NEG_X, -8.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_X);
        let hit = plane.intersect(&ray);
        assert!(hit.is_some_and(|p| (p.x + 8.0).abs() < 1e-5));
    }
}
