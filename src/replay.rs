//! Recorded input scripts replayed against the simulated host.
//!
//! A script describes a scene (map, terrain columns, selectable boxes,
//! water) and a sequence of frames, each a list of input events. Replaying
//! feeds every frame through a [`NavigationPlugin`] and records the camera
//! pose after each tick.
//!
//! ```toml
//! [map]
//! width = 32
//! depth = 32
//!
//! [scene]
//! terrain_height = 2
//!
//! [[frames]]
//! events = [
//!     { type = "cursor_moved", x = 400.0, y = 300.0 },
//!     { type = "mouse_button", button = "right", pressed = true },
//! ]
//!
//! [[frames]]
//! repeat = 10
//! events = [{ type = "scroll", delta = 0.05 }]
//! ```

use std::path::Path;

use glam::{IVec3, Vec2};
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::error::NavError;
use crate::host::simulated::{SelectableBox, SimulatedHost, VoxelTerrain};
use crate::host::{CameraSpec, MapSize};
use crate::input::InputEvent;
use crate::navigation::{InputProcessor, NavMode, NavigationPlugin};
use crate::options::Options;

/// One terrain column override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Grid x.
    pub x: i32,
    /// Grid y (world Z).
    pub y: i32,
    /// Number of solid levels.
    pub height: i32,
}

/// Water layer setup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSetup {
    /// Render water transparent.
    pub transparent: bool,
    /// Level-visibility tool setting; unlimited when absent.
    pub max_visible_level: Option<i32>,
    /// Flooded grid cells.
    pub cells: Vec<IVec3>,
}

/// Scene contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSetup {
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Levels of flat terrain under the whole map.
    pub terrain_height: i32,
    /// Columns replacing the flat terrain.
    pub columns: Vec<Column>,
    /// Selectable objects.
    pub selectables: Vec<SelectableBox>,
    /// Water layer.
    pub water: WaterSetup,
}

impl Default for SceneSetup {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(800.0, 600.0),
            fov_y: 60.0,
            terrain_height: 1,
            columns: Vec::new(),
            selectables: Vec::new(),
            water: WaterSetup::default(),
        }
    }
}

/// One scripted frame, optionally repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// Events delivered before the tick.
    #[serde(default)]
    pub events: Vec<InputEvent>,
    /// Number of ticks; events are only delivered before the first.
    #[serde(default = "one")]
    pub repeat: u32,
}

const fn one() -> u32 {
    1
}

/// A complete replay script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Host camera constants.
    pub spec: CameraSpec,
    /// Map dimensions.
    pub map: MapSize,
    /// Starting camera; looks at the map centre when absent.
    pub camera: Option<CameraPose>,
    /// Scene contents.
    pub scene: SceneSetup,
    /// Frames to replay.
    pub frames: Vec<ScriptFrame>,
}

/// Camera state after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Tick index, counting repeats.
    pub frame: usize,
    /// Gesture in progress after the tick.
    pub mode: NavMode,
    /// Camera fields after the tick.
    pub pose: CameraPose,
}

impl ReplayScript {
    /// Parse a script from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::ScriptParse(e.to_string()))
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build the simulated host described by the script.
    #[must_use]
    pub fn build_host(&self) -> SimulatedHost {
        let scene = &self.scene;
        let mut host = SimulatedHost::new(self.spec, self.map, scene.viewport);
        host.camera.fov_y = scene.fov_y;
        if let Some(pose) = &self.camera {
            pose.apply(&mut host.camera);
        }

        host.terrain = VoxelTerrain::flat(self.map, scene.terrain_height);
        for column in &scene.columns {
            host.terrain.set_column(column.x, column.y, column.height);
        }
        for selectable in &scene.selectables {
            host.selectables.push(*selectable);
        }

        host.water.transparent = scene.water.transparent;
        if let Some(level) = scene.water.max_visible_level {
            host.water.max_visible_level = level;
        }
        for cell in &scene.water.cells {
            host.water.flood(*cell);
        }
        host
    }

    /// Replay every frame and record the camera after each tick.
    #[must_use]
    pub fn run(&self, options: &Options) -> Vec<FrameRecord> {
        let mut host = self.build_host();
        host.input.set_bindings(options.bindings);
        let mut plugin = NavigationPlugin::new(host, options);

        let mut records = Vec::new();
        for script_frame in &self.frames {
            for event in &script_frame.events {
                plugin.host_mut().input.handle_event(*event);
            }
            for _ in 0..script_frame.repeat {
                let _ = plugin.process_input();
                let record = FrameRecord {
                    frame: records.len(),
                    mode: plugin.navigator().mode(),
                    pose: plugin.host().camera.pose,
                };
                log::debug!("frame {}: {:?}", record.frame, record);
                records.push(record);
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORBIT_SCRIPT: &str = r#"
[map]
width = 32
depth = 32

[camera]
vertical_angle = 40.0
horizontal_angle = 0.0
zoom_level = 0.5
target = [16.0, 2.0, 16.0]

[scene]
terrain_height = 2
columns = [{ x = 16, y = 16, height = 6 }]

[[frames]]
events = [
    { type = "cursor_moved", x = 400.0, y = 300.0 },
    { type = "mouse_button", button = "right", pressed = true },
]

[[frames]]
events = [{ type = "cursor_moved", x = 500.0, y = 300.0 }]
repeat = 3

[[frames]]
events = [{ type = "mouse_button", button = "right", pressed = false }]
"#;

    #[test]
    fn orbit_script_replays() {
        let script = ReplayScript::from_toml(ORBIT_SCRIPT).unwrap();
        assert_eq!(script.frames[1].repeat, 3);
        let records = script.run(&Options::default());
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].mode, NavMode::Orbit);
        assert_eq!(records[0].pose.horizontal_angle, 0.0);
        assert!((records[1].pose.horizontal_angle - 10.0).abs() < 1e-2);
        // no further pointer movement, no further rotation
        assert!((records[3].pose.horizontal_angle - 10.0).abs() < 1e-2);
        assert_eq!(records[4].mode, NavMode::Idle);
        assert!(records.iter().all(|r| r.pose.is_finite()));
    }

    #[test]
    fn scene_setup_builds_host() {
        let script = ReplayScript::from_toml(
            r#"
[scene]
terrain_height = 3
selectables = [{ min = [1.0, 0.0, 1.0], max = [2.0, 5.0, 2.0] }]

[scene.water]
transparent = true
cells = [[4, 4, 3]]
"#,
        )
        .unwrap();
        let host = script.build_host();
        assert!(host.water.transparent);
        assert_eq!(host.water.max_visible_level, i32::MAX);
        let map = MapSize::default();
        assert_eq!(host.terrain.len(), (map.width * map.depth * 3) as usize);
        assert_eq!(host.camera.pose.target, map.center());
    }

    #[test]
    fn unknown_event_is_a_script_error() {
        let err = ReplayScript::from_toml(
            "[[frames]]\nevents = [{ type = \"teleport\" }]",
        )
        .unwrap_err();
        assert!(matches!(err, NavError::ScriptParse(_)));
    }
}
