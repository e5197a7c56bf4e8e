//! Navigation options with TOML preset support.
//!
//! Tunables that the host spec data does not provide (orbit sensitivity,
//! zoom scaling, button roles, debug toggles) live here. Options serialize
//! to/from TOML so presets can be kept next to the host's own settings.

mod bindings;
mod debug;
mod navigation;

use std::path::Path;

pub use bindings::ButtonBindings;
pub use debug::DebugOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit, pan and zoom tuning.
    pub navigation: NavigationOptions,
    /// Mouse button roles.
    pub bindings: ButtonBindings,
    /// Debug visualization options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::BoundaryPolicy;
    use crate::input::{ButtonRole, MouseButton};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[navigation]
orbit_sensitivity = 0.25
boundary_policy = "height_planes"

[bindings]
middle = "none"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.orbit_sensitivity, 0.25);
        assert_eq!(
            opts.navigation.boundary_policy,
            BoundaryPolicy::HeightPlanes
        );
        // Everything else should be default
        assert_eq!(opts.navigation.vertical_limit_scale, 0.125);
        assert_eq!(opts.bindings.role(MouseButton::Left), ButtonRole::Move);
        assert_eq!(opts.bindings.role(MouseButton::Middle), ButtonRole::None);
        assert!(!opts.debug.show_crosshair);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[navigation]\nzoom_speed = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("terranav-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.debug.show_crosshair = true;
        opts.save(&dir.join("steep.toml")).unwrap();
        Options::default().save(&dir.join("flat.toml")).unwrap();

        let loaded = Options::load(&dir.join("steep.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["flat", "steep"]);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(NavError::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("navigation"));
        assert!(props.contains_key("bindings"));
        assert!(props.contains_key("debug"));

        let navigation = &props["navigation"]["properties"];
        assert!(navigation.get("orbit_sensitivity").is_some());
        assert!(navigation.get("boundary_policy").is_some());
    }
}
