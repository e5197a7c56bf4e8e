//! Voxel grid traversal.
//!
//! Amanatides–Woo stepping over a box-shaped grid of unit voxels. The ray
//! is first clipped to the grid box so rays starting outside the map (the
//! usual case for a camera looking down at terrain) begin at the voxel they
//! enter through.

use glam::{IVec3, Vec3};

use crate::camera::ray::Ray;
use crate::host::TraversedCoordinates;

/// Direction components below this are treated as zero.
const AXIS_EPSILON: f32 = 1e-9;

/// Walk `ray` (grid space) through the voxels of `[0, size)` and return the
/// first voxel accepted by `is_solid`.
///
/// The returned face is the outward normal of the face the ray entered
/// through, so `coordinates + face` is the empty voxel in front of the hit.
pub fn traverse(
    ray: &Ray,
    size: IVec3,
    is_solid: &dyn Fn(IVec3) -> bool,
) -> Option<TraversedCoordinates> {
    if size.min_element() <= 0 || ray.direction == Vec3::ZERO {
        return None;
    }
    let (t_enter, t_exit, entry_axis) = clip_to_box(ray, size)?;

    let dir = ray.direction;
    let step = IVec3::new(step_of(dir.x), step_of(dir.y), step_of(dir.z));
    let start = ray.point(t_enter);
    let mut voxel = start.floor().as_ivec3().clamp(IVec3::ZERO, size - 1);
    let mut face = entry_axis.map_or(IVec3::ZERO, |axis| {
        axis_vector(axis, -step[axis])
    });

    let mut t_max = Vec3::ZERO;
    let mut t_delta = Vec3::ZERO;
    for axis in 0..3 {
        if dir[axis].abs() < AXIS_EPSILON {
            t_max[axis] = f32::INFINITY;
            t_delta[axis] = f32::INFINITY;
            continue;
        }
        let boundary = if step[axis] > 0 {
            (voxel[axis] + 1) as f32
        } else {
            voxel[axis] as f32
        };
        t_max[axis] = (boundary - ray.origin[axis]) / dir[axis];
        t_delta[axis] = 1.0 / dir[axis].abs();
    }

    let mut t = t_enter;
    let max_steps = size.x + size.y + size.z + 3;
    for _ in 0..max_steps {
        if is_solid(voxel) {
            return Some(TraversedCoordinates {
                coordinates: voxel,
                face,
                intersection: ray.point(t),
            });
        }

        let axis = nearest_axis(t_max);
        t = t_max[axis];
        if t > t_exit + 1e-4 {
            return None;
        }
        voxel[axis] += step[axis];
        t_max[axis] += t_delta[axis];
        face = axis_vector(axis, -step[axis]);

        if voxel.cmplt(IVec3::ZERO).any() || voxel.cmpge(size).any() {
            return None;
        }
    }
    None
}

/// Slab test against `[0, size]`. Returns the entry/exit distances and the
/// axis the ray entered through (`None` when it starts inside).
fn clip_to_box(ray: &Ray, size: IVec3) -> Option<(f32, f32, Option<usize>)> {
    let max = size.as_vec3();
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_axis = None;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        if dir.abs() < AXIS_EPSILON {
            if origin < 0.0 || origin > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (0.0 - origin) / dir;
        let t2 = (max[axis] - origin) / dir;
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > t_enter {
            t_enter = near;
            entry_axis = Some(axis);
        }
        t_exit = t_exit.min(far);
    }

    if t_exit < 0.0 || t_enter > t_exit {
        return None;
    }
    if t_enter <= 0.0 {
        return Some((0.0, t_exit, None));
    }
    Some((t_enter, t_exit, entry_axis))
}

fn step_of(component: f32) -> i32 {
    if component >= 0.0 {
        1
    } else {
        -1
    }
}

fn nearest_axis(t_max: Vec3) -> usize {
    if t_max.x <= t_max.y && t_max.x <= t_max.z {
        0
    } else if t_max.y <= t_max.z {
        1
    } else {
        2
    }
}

fn axis_vector(axis: usize, value: i32) -> IVec3 {
    let mut v = IVec3::ZERO;
    v[axis] = value;
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_at(height: i32) -> impl Fn(IVec3) -> bool {
        move |c: IVec3| c.z < height
    }

    #[test]
    fn vertical_ray_lands_on_top_face() {
        let ray = Ray::new(Vec3::new(3.5, 4.5, 20.0), Vec3::NEG_Z);
        let hit = traverse(&ray, IVec3::new(8, 8, 10), &floor_at(3));
        let hit = hit.unwrap();
        assert_eq!(hit.coordinates, IVec3::new(3, 4, 2));
        assert_eq!(hit.face, IVec3::new(0, 0, 1));
        assert!((hit.intersection - Vec3::new(3.5, 4.5, 3.0)).length() < 1e-4);
        assert_eq!(hit.coordinates + hit.face, IVec3::new(3, 4, 3));
    }

    #[test]
    fn diagonal_ray_hits_wall_side() {
        let wall = |c: IVec3| c.x == 5;
        let ray = Ray::new(Vec3::new(0.5, 2.5, 2.5), Vec3::new(1.0, 0.0, 0.0));
        let hit = traverse(&ray, IVec3::new(8, 8, 8), &wall).unwrap();
        assert_eq!(hit.coordinates, IVec3::new(5, 2, 2));
        assert_eq!(hit.face, IVec3::new(-1, 0, 0));
        assert!((hit.intersection.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn ray_outside_grid_misses() {
        let ray = Ray::new(Vec3::new(-5.0, -5.0, 5.0), Vec3::NEG_X);
        assert!(traverse(&ray, IVec3::new(8, 8, 8), &floor_at(8)).is_none());
    }

    #[test]
    fn empty_grid_misses() {
        let ray = Ray::new(Vec3::new(4.0, 4.0, 20.0), Vec3::new(0.3, 0.2, -1.0));
        assert!(traverse(&ray, IVec3::new(8, 8, 8), &|_| false).is_none());
    }

    #[test]
    fn origin_inside_solid_voxel_has_no_face() {
        let ray = Ray::new(Vec3::new(1.5, 1.5, 0.5), Vec3::X);
        let hit = traverse(&ray, IVec3::new(4, 4, 4), &floor_at(1)).unwrap();
        assert_eq!(hit.coordinates, IVec3::new(1, 1, 0));
        assert_eq!(hit.face, IVec3::ZERO);
        assert_eq!(hit.intersection, ray.origin);
    }
}
