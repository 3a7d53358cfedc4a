//! Read-only queries and frame assembly for [`PoseEngine`].

use super::PoseEngine;
use crate::camera::{Camera, OrbitCamera};
use crate::editor::PoseEditor;
use crate::frame::{self, FrameData, LightingUniform};
use crate::kinematics::WorldPose;
use crate::options::Options;
use crate::segments::LimbSegments;
use crate::skeleton::{JointId, Skeleton};

// ── Figure ──

impl PoseEngine {
    /// The skeleton with its current rotations.
    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// World transforms from the last [`update`](Self::update) or import.
    #[must_use]
    pub fn world_pose(&self) -> &WorldPose {
        &self.world
    }

    /// Limb segments from the last [`update`](Self::update) or import.
    #[must_use]
    pub fn segments(&self) -> &LimbSegments {
        &self.segments
    }

    /// Whether a joint is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The joint being dragged, if any.
    #[must_use]
    pub fn selected_joint(&self) -> Option<JointId> {
        self.drag.selected()
    }
}

// ── Camera ──

impl PoseEngine {
    /// Current view.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }

    /// The orbit controller (for inspecting the lock state).
    #[must_use]
    pub fn orbit(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

// ── Editor & options ──

impl PoseEngine {
    /// The inline pose editor.
    #[must_use]
    pub fn editor(&self) -> &PoseEditor {
        &self.editor
    }

    /// Mutable access for recording user edits; apply them with
    /// [`apply_editor`](Self::apply_editor).
    pub fn editor_mut(&mut self) -> &mut PoseEditor {
        &mut self.editor
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Frame ──

impl PoseEngine {
    /// Assemble the data a render backend needs for the current frame.
    #[must_use]
    pub fn frame(&self) -> FrameData {
        let mut camera = self.camera.uniform;
        camera.selected_joint =
            self.drag.selected().map_or(-1, |id| id.index() as i32);

        let figure = &self.options.figure;
        FrameData {
            camera,
            lighting: LightingUniform::from_options(
                &self.options.lighting,
                figure,
            ),
            markers: frame::joint_markers(
                &self.skeleton,
                &self.world,
                self.drag.selected(),
                figure,
            ),
            segments: frame::segment_instances(&self.segments, figure),
            grid: frame::grid_lines(&self.options.scene),
            background: self.options.scene.background,
        }
    }
}
