//! World point resolution under the pointer.
//!
//! A pick ray is tested against the terrain voxel grid (with water and the
//! level-visibility tool taken into account) and against selectable scene
//! objects; the nearer hit wins. [`RayPicker::world_point`] adds the ground
//! plane and ray-origin fallbacks so navigation always has a pivot.

/// World/grid space conversions.
pub mod coordinates;
mod ray_picker;
/// Voxel grid traversal.
pub mod traversal;

pub use ray_picker::{HitCandidate, RayPicker, TerrainHit};
