//! The posing engine: figure, camera, drag state and pose I/O.

mod accessors;
mod input;
mod options;
mod pose_io;

use glam::Vec2;

use crate::camera::OrbitCamera;
use crate::editor::PoseEditor;
use crate::input::DragController;
use crate::kinematics::WorldPose;
use crate::options::Options;
use crate::pose::{self, PoseData};
use crate::segments::LimbSegments;
use crate::skeleton::Skeleton;

/// Callback invoked with the exported pose after every pose change.
pub type PoseListener = Box<dyn FnMut(&PoseData)>;

/// The posing engine: one figure, one camera, one drag at a time.
///
/// Owns the skeleton, its derived forward-kinematics and limb geometry,
/// the orbit camera, the drag state machine and the inline pose editor.
/// Hosts feed it [`InputEvent`](crate::InputEvent)s, call
/// [`update`](Self::update) once per frame and hand
/// [`frame`](Self::frame) to their render backend.
///
/// # Example
///
/// ```ignore
/// let mut engine = PoseEngine::new((1280, 720), Options::default());
/// engine.on_pose_update(Box::new(|pose| save_somewhere(pose)));
/// engine.handle_input(InputEvent::CursorMoved { x, y });
/// engine.update();
/// backend.render(&engine.frame())?;
/// ```
pub struct PoseEngine {
    skeleton: Skeleton,
    world: WorldPose,
    segments: LimbSegments,
    camera: OrbitCamera,
    drag: DragController,
    editor: PoseEditor,
    options: Options,
    viewport: (u32, u32),
    last_cursor_pos: Option<Vec2>,
    /// Left button held over empty space: pointer motion orbits.
    orbit_pressed: bool,
    /// Right button held: pointer motion pans.
    pan_pressed: bool,
    shift_pressed: bool,
    listeners: Vec<PoseListener>,
}

impl PoseEngine {
    /// Build the figure in its rest pose and place the camera for a
    /// viewport of `width` x `height` pixels.
    #[must_use]
    pub fn new((width, height): (u32, u32), options: Options) -> Self {
        let skeleton = Skeleton::build();
        let world = WorldPose::evaluate(&skeleton);
        let mut segments = LimbSegments::new();
        segments.update(&world);
        let camera = OrbitCamera::new(&options.camera, width, height);
        let drag = DragController::new(options.interaction.drag_sensitivity);

        let mut engine = Self {
            skeleton,
            world,
            segments,
            camera,
            drag,
            editor: PoseEditor::new(),
            options,
            viewport: (width, height),
            last_cursor_pos: None,
            orbit_pressed: false,
            pan_pressed: false,
            shift_pressed: false,
            listeners: Vec::new(),
        };
        engine.sync_editor(&pose::export_pose(&engine.skeleton));
        log::debug!("pose engine ready ({width}x{height})");
        engine
    }

    /// Per-frame refresh: forward kinematics, limb segments and the camera
    /// uniform are recomputed unconditionally.
    pub fn update(&mut self) {
        self.refresh_figure();
        self.camera.update_uniform();
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.camera.resize(width, height);
    }

    fn refresh_figure(&mut self) {
        self.world.recompute(&self.skeleton);
        self.segments.update(&self.world);
    }

    /// Export the live pose, resync the editor and notify listeners.
    fn pose_changed(&mut self) {
        let pose = pose::export_pose(&self.skeleton);
        self.sync_editor(&pose);
        for listener in &mut self.listeners {
            listener(&pose);
        }
    }

    fn sync_editor(&mut self, pose: &PoseData) {
        if let Err(e) = self.editor.sync(pose) {
            log::warn!("failed to refresh pose editor: {e}");
        }
    }
}
