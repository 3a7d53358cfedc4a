//! Input dispatch for [`PoseEngine`].

use glam::Vec2;

use super::PoseEngine;
use crate::input::{InputEvent, MouseButton};
use crate::picking::{self, JointHit};

impl PoseEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Left press over an interactive joint starts a drag (and locks the
    /// camera); left press elsewhere orbits, or pans with shift held.
    /// Right-button motion pans. Pointer motion rotates the dragged joint.
    /// Left release ends the drag wherever the pointer is.
    ///
    /// Returns `true` when the pose changed, in which case listeners have
    /// already been notified and the editor resynced.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.dispatch_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.dispatch_mouse_button(button, pressed);
                false
            }
            InputEvent::Scroll { delta } => {
                self.camera.zoom(delta);
                false
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                false
            }
            InputEvent::Resized { width, height } => {
                self.resize(width, height);
                false
            }
        }
    }

    /// Cursor moved: rotate the dragged joint, or orbit/pan the camera.
    fn dispatch_cursor_moved(&mut self, pos: Vec2) -> bool {
        let delta = self.last_cursor_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.last_cursor_pos = Some(pos);

        if self.drag.is_dragging() {
            if delta == Vec2::ZERO {
                return false;
            }
            let rotated = self.drag.pointer_moved(delta, &mut self.skeleton);
            if rotated {
                self.pose_changed();
            }
            return rotated;
        }

        if self.pan_pressed {
            self.camera.pan(delta);
        } else if self.orbit_pressed {
            if self.shift_pressed {
                self.camera.pan(delta);
            } else {
                self.camera.rotate(delta);
            }
        }
        false
    }

    fn dispatch_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.dispatch_left_button(pressed),
            MouseButton::Right => {
                self.pan_pressed = pressed && !self.drag.is_dragging();
            }
            MouseButton::Middle => {}
        }
    }

    fn dispatch_left_button(&mut self, pressed: bool) {
        if pressed {
            if self.drag.is_dragging() {
                return;
            }
            let hit = self.pick_at_cursor();
            let started = self.drag.pointer_down(hit, &mut self.camera);
            self.orbit_pressed = !started;
        } else {
            self.orbit_pressed = false;
            let _ = self.drag.pointer_up(&mut self.camera);
        }
    }

    /// Interactive joint under the last known cursor position.
    fn pick_at_cursor(&self) -> Option<JointHit> {
        let pos = self.last_cursor_pos?;
        let (width, height) = self.viewport;
        let ray = self.camera.camera.screen_ray(
            pos.x,
            pos.y,
            width as f32,
            height as f32,
        );
        let hit = picking::pick_joint(&ray, &self.skeleton, &self.world);
        if let Some(hit) = hit {
            log::debug!(
                "picked {} at distance {:.3}",
                self.skeleton.joint(hit.joint).name(),
                hit.distance
            );
        }
        hit
    }
}
