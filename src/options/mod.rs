//! Camera and control options with TOML preset support.
//!
//! Initial camera placement, lens, speeds, input sensitivity and key
//! bindings are consolidated here. Options serialize to/from TOML for
//! presets stored in a directory of `*.toml` files.

mod camera;
mod controls;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement, lens and speeds.
    pub camera: CameraOptions,
    /// Mouse and keyboard controls.
    pub controls: ControlOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)?;
        log::info!("saved options to {}", path.display());
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
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
speed = 4.0
field_of_view = 60.0
world_up = [0.0, 0.0, 1.0]

[controls.sensitivity]
scroll_zoom = 1.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.speed, 4.0);
        assert_eq!(opts.camera.field_of_view, Some(60.0));
        assert_eq!(opts.camera.world_up, Some([0.0, 0.0, 1.0]));
        assert_eq!(opts.controls.sensitivity.scroll_zoom, 1.5);
        // Everything else should be default
        assert_eq!(opts.camera.far_plane, 100.0);
        assert_eq!(opts.controls.sensitivity.key_zoom, 5.0);
        assert_eq!(
            opts.controls.key_bindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn key_bindings_from_toml() {
        let toml_str = r#"
[controls.key_bindings.bindings]
KeyE = "roll_right"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        let bindings = &opts.controls.key_bindings;
        assert_eq!(bindings.lookup("KeyE"), Some(KeyAction::RollRight));
        assert_eq!(bindings.lookup("KeyW"), None);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let dir = std::env::temp_dir().join("navcam-options-invalid");
        let path = dir.join("broken.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[camera]\nspeed = \"fast\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, CameraError::OptionsParse(_)));
        let missing = Options::load(&dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, CameraError::Io(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join("navcam-options-presets");
        let _ = std::fs::remove_dir_all(&dir);

        let mut walking = Options::default();
        walking.camera.position = [0.0, 1.7, 0.0];
        walking.camera.field_of_view = Some(70.0);
        walking.camera.max_field_of_view = Some(90.0);
        walking.save(&dir.join("walking.toml")).unwrap();

        let mut flying = Options::default();
        flying.controls.key_bindings = crate::input::KeyBindings::flying();
        flying.save(&dir.join("flying.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["flying", "walking"]);
        assert_eq!(Options::load(&dir.join("walking.toml")).unwrap(), walking);
        assert_eq!(Options::load(&dir.join("flying.toml")).unwrap(), flying);
        assert!(Options::list_presets(&dir.join("absent")).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("speed").is_some());
        assert!(camera.get("field_of_view").is_some());
        assert!(camera.get("position").is_none());

        let controls = &props["controls"]["properties"];
        assert!(controls.get("sensitivity").is_some());
        assert!(controls.get("key_bindings").is_none());
    }
}
