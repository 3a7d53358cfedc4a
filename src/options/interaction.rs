use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::drag::DEFAULT_DRAG_SENSITIVITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Joint dragging parameters.
pub struct InteractionOptions {
    /// Joint rotation in radians per pixel of pointer travel.
    #[schemars(title = "Drag Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub drag_sensitivity: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}
