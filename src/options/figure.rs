use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Appearance of the stick figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Figure", inline)]
#[serde(default)]
pub struct FigureOptions {
    /// RGB color of joint markers.
    #[schemars(skip)]
    pub joint_color: [f32; 3],
    /// RGB color of the head marker.
    #[schemars(skip)]
    pub head_color: [f32; 3],
    /// RGB color of the joint being dragged.
    #[schemars(skip)]
    pub selected_color: [f32; 3],
    /// RGB color of limb segments.
    #[schemars(skip)]
    pub limb_color: [f32; 3],
    /// Radius of the limb cylinders.
    #[schemars(title = "Limb Thickness", range(min = 0.005, max = 0.08), extend("step" = 0.005))]
    pub limb_radius: f32,
    /// Surface roughness of joint markers.
    #[schemars(title = "Roughness", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            joint_color: rgb(0x00aaff),
            head_color: rgb(0xffaaff),
            selected_color: rgb(0xffcc00),
            limb_color: [1.0, 1.0, 1.0],
            limb_radius: 0.02,
            roughness: 0.5,
        }
    }
}

/// Unpack `0xRRGGBB` into RGB floats in `0..=1`.
pub(crate) fn rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}
