use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::figure::rgb;

/// Backdrop and floor grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// RGB clear color.
    #[schemars(skip)]
    pub background: [f32; 3],
    /// Draw the floor grid.
    #[schemars(title = "Show Grid")]
    pub show_grid: bool,
    /// Side length of the square grid.
    #[schemars(title = "Grid Size", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub grid_size: f32,
    /// Number of cells along each side.
    #[schemars(title = "Grid Divisions", range(min = 1, max = 100))]
    pub grid_divisions: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            background: rgb(0x111827),
            show_grid: true,
            grid_size: 10.0,
            grid_divisions: 10,
        }
    }
}
