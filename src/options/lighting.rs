use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scene lighting: one ambient term and one directional key light.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub ambient: f32,
    /// Directional key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub key_intensity: f32,
    /// Position the key light shines from, toward the origin.
    #[schemars(skip)]
    pub key_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 1.5,
            key_intensity: 2.0,
            key_position: [5.0, 10.0, 7.5],
        }
    }
}
