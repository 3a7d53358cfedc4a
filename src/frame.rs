//! Per-frame render data.
//!
//! Everything a render backend needs to draw one frame of the figure,
//! laid out as `bytemuck::Pod` structs so the slices can be uploaded to
//! GPU buffers without conversion.

use glam::Vec3;

use crate::camera::CameraUniform;
use crate::kinematics::WorldPose;
use crate::options::{FigureOptions, LightingOptions, SceneOptions};
use crate::segments::LimbSegments;
use crate::skeleton::{JointId, JointName, Skeleton};

/// Per-instance data for a joint marker sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct JointMarker {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = joint index (packed as float)
    pub color: [f32; 4],
}

/// Per-instance data for a limb cylinder.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentInstance {
    /// Column-major model matrix for the unit cylinder.
    pub model: [[f32; 4]; 4],
    /// xyz = RGB color, w unused
    pub color: [f32; 4],
}

/// One floor-grid line.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridLine {
    /// Start point (xyz), w = 1
    pub start: [f32; 4],
    /// End point (xyz), w = 1
    pub end: [f32; 4],
}

/// Lighting uniform: ambient plus one directional key light.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Direction toward the key light (normalized).
    pub key_dir: [f32; 3],
    /// Key light intensity.
    pub key_intensity: f32,
    /// Ambient intensity.
    pub ambient: f32,
    /// Marker surface roughness.
    pub roughness: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl LightingUniform {
    /// Uniform for the configured lights.
    #[must_use]
    pub fn from_options(lighting: &LightingOptions, figure: &FigureOptions) -> Self {
        Self {
            key_dir: Vec3::from_array(lighting.key_position)
                .normalize_or(Vec3::Y)
                .to_array(),
            key_intensity: lighting.key_intensity,
            ambient: lighting.ambient,
            roughness: figure.roughness,
            _pad: [0.0; 2],
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameData {
    /// Camera uniform, with `selected_joint` set while dragging.
    pub camera: CameraUniform,
    /// Lights.
    pub lighting: LightingUniform,
    /// One marker per joint that carries one (the root has none).
    pub markers: Vec<JointMarker>,
    /// One cylinder per bone.
    pub segments: Vec<SegmentInstance>,
    /// Floor grid; empty when the grid is hidden.
    pub grid: Vec<GridLine>,
    /// RGB clear color.
    pub background: [f32; 3],
}

/// Marker instances for the current pose. The `selected` joint (if any)
/// is drawn in the selection color.
#[must_use]
pub fn joint_markers(
    skeleton: &Skeleton,
    world: &WorldPose,
    selected: Option<JointId>,
    figure: &FigureOptions,
) -> Vec<JointMarker> {
    skeleton
        .joints()
        .iter()
        .enumerate()
        .filter_map(|(index, joint)| {
            let radius = joint.marker_radius()?;
            let id = Skeleton::id_of(joint.name());
            let rgb = if selected == Some(id) {
                figure.selected_color
            } else if joint.name() == JointName::Head {
                figure.head_color
            } else {
                figure.joint_color
            };
            Some(JointMarker {
                center: world.position(id).extend(radius).to_array(),
                color: [rgb[0], rgb[1], rgb[2], index as f32],
            })
        })
        .collect()
}

/// Cylinder instances for every bone.
#[must_use]
pub fn segment_instances(
    segments: &LimbSegments,
    figure: &FigureOptions,
) -> Vec<SegmentInstance> {
    let [r, g, b] = figure.limb_color;
    segments
        .as_slice()
        .iter()
        .map(|segment| SegmentInstance {
            model: segment.model_matrix(figure.limb_radius).to_cols_array_2d(),
            color: [r, g, b, 0.0],
        })
        .collect()
}

/// Square grid on the `y = 0` plane centred at the origin.
#[must_use]
pub fn grid_lines(scene: &SceneOptions) -> Vec<GridLine> {
    if !scene.show_grid || scene.grid_divisions == 0 {
        return Vec::new();
    }
    let half = scene.grid_size * 0.5;
    let step = scene.grid_size / scene.grid_divisions as f32;
    let mut lines = Vec::with_capacity((scene.grid_divisions as usize + 1) * 2);
    for i in 0..=scene.grid_divisions {
        let k = (i as f32).mul_add(step, -half);
        lines.push(GridLine {
            start: [-half, 0.0, k, 1.0],
            end: [half, 0.0, k, 1.0],
        });
        lines.push(GridLine {
            start: [k, 0.0, -half, 1.0],
            end: [k, 0.0, half, 1.0],
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn every_joint_but_the_root_gets_a_marker() {
        let skeleton = Skeleton::build();
        let world = WorldPose::evaluate(&skeleton);
        let opts = Options::default();
        let markers = joint_markers(&skeleton, &world, None, &opts.figure);
        assert_eq!(markers.len(), 15);

        let head = markers
            .iter()
            .find(|m| m.color[3] == JointName::Head as u8 as f32)
            .unwrap();
        let center = glam::Vec4::from_array(head.center);
        assert!(center.abs_diff_eq(glam::Vec4::new(0.0, 2.2, 0.0, 0.2), 1e-6));
        assert_eq!(&head.color[..3], &opts.figure.head_color);
    }

    #[test]
    fn selected_joint_uses_selection_color() {
        let skeleton = Skeleton::build();
        let world = WorldPose::evaluate(&skeleton);
        let opts = Options::default();
        let knee = Skeleton::id_of(JointName::LeftKnee);
        let markers =
            joint_markers(&skeleton, &world, Some(knee), &opts.figure);
        let selected: Vec<_> = markers
            .iter()
            .filter(|m| m.color[..3] == opts.figure.selected_color)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].color[3], knee.index() as f32);
    }

    #[test]
    fn one_segment_instance_per_bone() {
        let skeleton = Skeleton::build();
        let mut segments = LimbSegments::new();
        segments.update(&WorldPose::evaluate(&skeleton));
        let opts = Options::default();
        let instances = segment_instances(&segments, &opts.figure);
        assert_eq!(instances.len(), 15);
        assert!(instances.iter().all(|i| i.color[..3] == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn default_grid_has_eleven_lines_each_way() {
        let scene = SceneOptions::default();
        let lines = grid_lines(&scene);
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0].start, [-5.0, 0.0, -5.0, 1.0]);
        assert_eq!(lines[21].end, [5.0, 0.0, 5.0, 1.0]);

        let hidden = SceneOptions {
            show_grid: false,
            ..SceneOptions::default()
        };
        assert!(grid_lines(&hidden).is_empty());
    }

    #[test]
    fn gpu_structs_have_expected_sizes() {
        assert_eq!(size_of::<JointMarker>(), 32);
        assert_eq!(size_of::<SegmentInstance>(), 80);
        assert_eq!(size_of::<LightingUniform>(), 32);
    }
}
