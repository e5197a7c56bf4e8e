use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::BoundaryPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Orbit, pan and zoom tuning.
pub struct NavigationOptions {
    /// Orbit rotation in degrees per pixel of pointer travel.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub orbit_sensitivity: f32,
    /// Factor applied to the host's minimum vertical angle to get the
    /// lowest pitch reachable by orbiting.
    #[schemars(title = "Vertical Limit Scale", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub vertical_limit_scale: f32,
    /// Factor applied to the host's maximum zoom level to get the farthest
    /// zoom-out distance.
    #[schemars(title = "Max Zoom Scale", range(min = 1.0, max = 4.0), extend("step" = 0.1))]
    pub max_zoom_scale: f32,
    /// Distance fraction moved per unit of scroll.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Closest the eye may get to the zoom point.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// How the eye position is turned back into target and zoom level.
    #[schemars(title = "Boundary Policy")]
    pub boundary_policy: BoundaryPolicy,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.1,
            vertical_limit_scale: 0.125,
            max_zoom_scale: 2.0,
            zoom_speed: 1.0,
            min_distance: 1.0,
            boundary_policy: BoundaryPolicy::MapEdges,
        }
    }
}
