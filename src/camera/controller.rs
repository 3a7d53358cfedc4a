use glam::{Mat3, Quat, Vec2, Vec3};

use super::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Something whose orbit/pan input can be switched off, so that dragging a
/// joint does not also swing the view.
pub trait OrbitLock {
    /// Enable or disable orbit, pan and zoom input.
    fn set_orbit_enabled(&mut self, enabled: bool);

    /// Whether orbit input is currently accepted.
    fn orbit_enabled(&self) -> bool;
}

/// Orbit camera: rotates, pans and zooms around a focus point.
pub struct OrbitCamera {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    enabled: bool,

    /// Current camera state.
    pub camera: Camera,
    /// GPU-side copy of the camera, refreshed by
    /// [`update_uniform`](Self::update_uniform).
    pub uniform: CameraUniform,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitCamera {
    /// Place the camera per `options` for a viewport of `width` x `height`.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let eye = Vec3::from_array(options.eye);
        let focus_point = Vec3::from_array(options.target);
        let offset = eye - focus_point;
        let distance = offset.length().max(f32::EPSILON);

        // Basis whose local +Z points from the focus back to the eye.
        let back = offset / distance;
        let right = Vec3::Y.cross(back).normalize_or(Vec3::X);
        let up = back.cross(right);
        let orientation = Quat::from_mat3(&Mat3::from_cols(right, up, back));

        let camera = Camera {
            eye,
            target: focus_point,
            up,
            aspect: aspect_ratio(width, height),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            orientation,
            distance,
            focus_point,
            enabled: true,
            camera,
            uniform,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Adopt new projection and speed settings. Placement (eye and target)
    /// is left alone so the user's view survives an options change.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
    }

    /// Refresh the GPU uniform from the current camera.
    pub fn update_uniform(&mut self) {
        self.uniform.update_view_proj(&self.camera);
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = aspect_ratio(width, height);
    }

    /// Orbit around the focus point by `delta` pixels of pointer motion.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal_rotation * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical_rotation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Slide the focus point in the view plane.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Move toward (positive) or away from (negative) the focus point.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(0.5, 100.0);
        self.update_camera_pos();
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Distance from the eye to the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

impl OrbitLock for OrbitCamera {
    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn orbit_enabled(&self) -> bool {
        self.enabled
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
