use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Arena index of the joint being dragged (-1 if none).
    pub selected_joint: i32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix alone ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// World-space ray through a viewport pixel (origin top-left, y down).
    ///
    /// Built from the camera basis and field of view rather than by
    /// inverting the view-projection matrix.
    #[must_use]
    pub fn screen_ray(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Ray {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);

        // Screen coords to normalized device coords (-1 to 1)
        let ndc_x = (screen_x / screen_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_y / screen_height) * 2.0;

        let tan_fov = (self.fovy / 2.0).to_radians().tan();
        let ray_x = ndc_x * self.aspect * tan_fov;
        let ray_y = ndc_y * tan_fov;

        Ray::new(self.eye, forward + right * ray_x + up * ray_y)
    }

    /// Project a world point to viewport pixels. `None` when the point is
    /// behind the camera.
    #[must_use]
    pub fn project_to_screen(
        &self,
        point: Vec3,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Vec2> {
        let clip = self.build_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * screen_width,
            (1.0 - ndc.y) * 0.5 * screen_height,
        ))
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 75.0,
            selected_joint: -1,
            _pad: [0.0; 3],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = (camera.target - camera.eye).normalize().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 1.5, 3.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn centre_pixel_ray_points_at_target() {
        let cam = camera();
        let ray = cam.screen_ray(640.0, 360.0, 1280.0, 720.0);
        let expected = (cam.target - cam.eye).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-5));
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn projected_point_casts_ray_back_through_it() {
        let cam = camera();
        let point = Vec3::new(0.3, 0.6, 0.0);
        let pixel = cam.project_to_screen(point, 1280.0, 720.0).unwrap();
        let ray = cam.screen_ray(pixel.x, pixel.y, 1280.0, 720.0);

        let to_point = (point - ray.origin).normalize();
        assert!(ray.direction.abs_diff_eq(to_point, 1e-4));
    }

    #[test]
    fn points_behind_the_eye_do_not_project() {
        let cam = camera();
        assert!(cam
            .project_to_screen(Vec3::new(0.0, 1.5, 10.0), 800.0, 600.0)
            .is_none());
    }

    #[test]
    fn uniform_layout_is_sixteen_byte_aligned() {
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }
}
