use glam::{DVec3, Vec2};

use crate::camera::OrbitLock;
use crate::picking::JointHit;
use crate::skeleton::{JointId, Skeleton};

/// Radians of rotation per pixel of pointer travel.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.01;

/// Whether a joint is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Nothing selected; pointer motion goes to the camera.
    #[default]
    Idle,
    /// A joint is being rotated by pointer motion.
    Dragging {
        /// The selected joint.
        joint: JointId,
    },
}

/// Single-joint drag protocol.
///
/// Pointer-down on a joint selects it and locks the camera; motion rotates
/// the selected joint (horizontal motion about local Y, vertical about
/// local X); pointer-up releases it and unlocks the camera. Only one joint
/// can be held at a time.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    sensitivity: f32,
}

impl DragController {
    /// Controller rotating `sensitivity` radians per pixel.
    #[must_use]
    pub const fn new(sensitivity: f32) -> Self {
        Self {
            state: DragState::Idle,
            sensitivity,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// The held joint, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<JointId> {
        match self.state {
            DragState::Dragging { joint } => Some(joint),
            DragState::Idle => None,
        }
    }

    /// Whether a joint is held.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Radians per pixel.
    #[must_use]
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Change the rotation rate; takes effect on the next move.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Pointer pressed over the viewport.
    ///
    /// Starts a drag when `hit` names a joint and no drag is in progress;
    /// the camera is locked for the duration. Returns whether a drag
    /// started.
    pub fn pointer_down(
        &mut self,
        hit: Option<JointHit>,
        camera: &mut impl OrbitLock,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(hit) = hit else {
            return false;
        };
        self.state = DragState::Dragging { joint: hit.joint };
        camera.set_orbit_enabled(false);
        log::debug!("drag start on joint {}", hit.joint.index());
        true
    }

    /// Pointer moved by `delta` pixels. Rotates the held joint, if any, and
    /// returns whether a rotation was applied.
    pub fn pointer_moved(&self, delta: Vec2, skeleton: &mut Skeleton) -> bool {
        let Some(joint) = self.selected() else {
            return false;
        };
        let rate = f64::from(self.sensitivity);
        let rotation = DVec3::new(
            f64::from(delta.y) * rate,
            f64::from(delta.x) * rate,
            0.0,
        );
        skeleton.rotate_by(joint, rotation);
        true
    }

    /// Pointer released anywhere (not only over the viewport). Ends the drag
    /// and unlocks the camera; does nothing while idle.
    pub fn pointer_up(&mut self, camera: &mut impl OrbitLock) -> bool {
        let DragState::Dragging { joint } = self.state else {
            return false;
        };
        self.state = DragState::Idle;
        camera.set_orbit_enabled(true);
        log::debug!("drag end on joint {}", joint.index());
        true
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::JointName;

    #[derive(Default)]
    struct RecordingLock {
        enabled: bool,
        calls: Vec<bool>,
    }

    impl OrbitLock for RecordingLock {
        fn set_orbit_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.calls.push(enabled);
        }

        fn orbit_enabled(&self) -> bool {
            self.enabled
        }
    }

    fn hit(name: JointName) -> Option<JointHit> {
        Some(JointHit {
            joint: Skeleton::id_of(name),
            distance: 1.0,
        })
    }

    #[test]
    fn horizontal_drag_yaws_the_joint() {
        let mut skeleton = Skeleton::build();
        let mut lock = RecordingLock::default();
        let mut drag = DragController::default();

        assert!(drag.pointer_down(hit(JointName::LeftElbow), &mut lock));
        assert!(drag.pointer_moved(Vec2::new(100.0, 0.0), &mut skeleton));

        let r = skeleton
            .joint(Skeleton::id_of(JointName::LeftElbow))
            .rotation();
        assert!((r.y - 1.0).abs() < 1e-6);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn moves_accumulate_on_both_axes() {
        let mut skeleton = Skeleton::build();
        skeleton.apply_rotation(
            "torso",
            crate::pose::EulerDegrees::new(0.0, 0.0, 45.0),
        );
        let mut lock = RecordingLock::default();
        let mut drag = DragController::default();

        let _ = drag.pointer_down(hit(JointName::Torso), &mut lock);
        let _ = drag.pointer_moved(Vec2::new(10.0, 20.0), &mut skeleton);
        let _ = drag.pointer_moved(Vec2::new(-5.0, 10.0), &mut skeleton);

        let r = skeleton.joint(Skeleton::id_of(JointName::Torso)).rotation();
        assert!((r.y - 0.05).abs() < 1e-6);
        assert!((r.x - 0.3).abs() < 1e-6);
        // Depth axis is never touched by dragging.
        assert!((r.z - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn camera_lock_is_toggled_exactly_once_each_way() {
        let mut skeleton = Skeleton::build();
        let mut lock = RecordingLock {
            enabled: true,
            calls: Vec::new(),
        };
        let mut drag = DragController::default();

        let _ = drag.pointer_down(hit(JointName::Neck), &mut lock);
        assert!(!lock.orbit_enabled());
        let _ = drag.pointer_moved(Vec2::new(3.0, 4.0), &mut skeleton);
        // A second press while dragging is ignored.
        assert!(!drag.pointer_down(hit(JointName::Torso), &mut lock));
        assert_eq!(drag.selected(), Some(Skeleton::id_of(JointName::Neck)));
        assert!(drag.pointer_up(&mut lock));
        assert!(!drag.pointer_up(&mut lock));

        assert_eq!(lock.calls, vec![false, true]);
        assert!(lock.orbit_enabled());
    }

    #[test]
    fn press_on_empty_space_stays_idle() {
        let mut skeleton = Skeleton::build();
        let mut lock = RecordingLock::default();
        let mut drag = DragController::default();

        assert!(!drag.pointer_down(None, &mut lock));
        assert_eq!(drag.state(), DragState::Idle);
        assert!(!drag.pointer_moved(Vec2::new(50.0, 50.0), &mut skeleton));
        assert!(skeleton.joints().iter().all(|j| j.rotation() == DVec3::ZERO));
        assert!(lock.calls.is_empty());
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut lock = RecordingLock::default();
        let mut drag = DragController::default();
        assert!(!drag.pointer_up(&mut lock));
        assert!(lock.calls.is_empty());
    }

    #[test]
    fn custom_sensitivity_scales_rotation() {
        let mut skeleton = Skeleton::build();
        let mut lock = RecordingLock::default();
        let mut drag = DragController::new(0.02);

        let _ = drag.pointer_down(hit(JointName::RightKnee), &mut lock);
        let _ = drag.pointer_moved(Vec2::new(0.0, 50.0), &mut skeleton);
        let r = skeleton
            .joint(Skeleton::id_of(JointName::RightKnee))
            .rotation();
        assert!((r.x - 1.0).abs() < 1e-6);
    }
}
