//! Runtime options with TOML preset support.
//!
//! Camera, drag, figure appearance, lighting and backdrop settings are
//! consolidated here. Options serialize to/from TOML and describe
//! themselves with a JSON Schema for settings UIs.

mod camera;
mod figure;
mod interaction;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use figure::FigureOptions;
pub use interaction::InteractionOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PoseError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Joint dragging parameters.
    pub interaction: InteractionOptions,
    /// Figure colors and limb thickness.
    pub figure: FigureOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Background and floor grid.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PoseError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PoseError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PoseError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PoseError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
[interaction]
drag_sensitivity = 0.02
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.drag_sensitivity, 0.02);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 75.0);
        assert_eq!(opts.camera.eye, [0.0, 1.5, 3.0]);
        assert!(opts.scene.show_grid);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let dir = std::env::temp_dir()
            .join(format!("stickpose-options-invalid-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(PoseError::OptionsParse(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = std::env::temp_dir()
            .join(format!("stickpose-options-save-{}", std::process::id()));
        let path = dir.join("nested").join("preset.toml");
        let mut opts = Options::default();
        opts.figure.limb_radius = 0.04;
        opts.camera.fovy = 60.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("stickpose-no-such-options.toml");
        assert!(matches!(Options::load(&path), Err(PoseError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("figure"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("scene"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("eye").is_none());
        let figure = &props["figure"]["properties"];
        assert!(figure.get("limb_radius").is_some());
        assert!(figure.get("joint_color").is_none());
    }
}
