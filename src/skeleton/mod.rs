//! The articulated figure: a fixed arena of sixteen joints.
//!
//! Each joint record holds its parent index and child indices; the name
//! index and the interactive subset are derived once at construction and
//! never mutated afterwards. Only local rotations change during a session.

mod bones;
mod joint;

pub use bones::{Bone, BONES};
use glam::DVec3;
pub use joint::{Joint, JointId, JointName, UnknownJoint};
use rustc_hash::FxHashMap;

use crate::pose::EulerDegrees;

/// Fixed-topology skeleton with mutable local rotations.
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// Arena in [`JointName::ALL`] order, so parents precede children.
    joints: Vec<Joint>,
    by_name: FxHashMap<&'static str, JointId>,
    interactive: Vec<JointId>,
}

impl Skeleton {
    /// Build the figure in its rest pose (all rotations zero).
    ///
    /// Every call produces an independent tree; dropping the previous one
    /// releases its joints and hit volumes.
    #[must_use]
    pub fn build() -> Self {
        let mut joints: Vec<Joint> = Vec::with_capacity(JointName::ALL.len());
        let mut by_name = FxHashMap::default();

        for (index, name) in JointName::ALL.into_iter().enumerate() {
            let id = JointId(index as u8);
            let (parent_name, offset) = name.rest();
            let parent = parent_name.map(Self::id_of);
            if let Some(parent) = parent {
                joints[parent.index()].push_child(id);
            }
            joints.push(Joint::new(name, parent, offset));
            let _ = by_name.insert(name.as_str(), id);
        }

        let interactive =
            JointName::INTERACTIVE.into_iter().map(Self::id_of).collect();

        Self {
            joints,
            by_name,
            interactive,
        }
    }

    /// Arena index of a joint. Total because the topology is fixed.
    #[must_use]
    pub const fn id_of(name: JointName) -> JointId {
        JointId(name as u8)
    }

    /// The root joint (`hips`).
    #[must_use]
    pub fn root(&self) -> JointId {
        Self::id_of(JointName::Hips)
    }

    /// Number of joints in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Borrow a joint record.
    #[must_use]
    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    /// All joints in arena order (parents before children).
    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Look up a joint by its wire name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<JointId> {
        self.by_name.get(name).copied()
    }

    /// The user-controllable joints, in pose export order.
    #[must_use]
    pub fn interactive(&self) -> &[JointId] {
        &self.interactive
    }

    /// Whether `id` belongs to the interactive set.
    #[must_use]
    pub fn is_interactive(&self, id: JointId) -> bool {
        self.interactive.contains(&id)
    }

    /// Set the local rotation of the named joint from degrees.
    ///
    /// Unknown names and joints outside the interactive set are ignored;
    /// this is what lets pose import tolerate foreign keys. No clamping or
    /// normalization is applied.
    pub fn apply_rotation(&mut self, name: &str, degrees: EulerDegrees) {
        let Some(id) = self.by_name(name).filter(|&id| self.is_interactive(id))
        else {
            log::trace!("ignoring rotation for non-interactive joint {name:?}");
            return;
        };
        self.joints[id.index()].set_rotation(degrees.to_radians());
    }

    /// Add `delta` radians to a joint's local Euler angles.
    pub(crate) fn rotate_by(&mut self, id: JointId, delta: DVec3) {
        let joint = &mut self.joints[id.index()];
        let rotation = joint.rotation() + delta;
        joint.set_rotation(rotation);
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn builds_sixteen_joints_rooted_at_hips() {
        let skeleton = Skeleton::build();
        assert_eq!(skeleton.len(), 16);
        let root = skeleton.joint(skeleton.root());
        assert_eq!(root.name(), JointName::Hips);
        assert!(root.parent().is_none());
        assert_eq!(root.offset(), Vec3::new(0.0, 1.0, 0.0));

        let non_roots = skeleton
            .joints()
            .iter()
            .filter(|j| j.parent().is_some())
            .count();
        assert_eq!(non_roots, 15);
    }

    #[test]
    fn arena_order_matches_name_order() {
        let skeleton = Skeleton::build();
        for name in JointName::ALL {
            let id = Skeleton::id_of(name);
            assert_eq!(skeleton.joint(id).name(), name);
            assert_eq!(skeleton.by_name(name.as_str()), Some(id));
        }
    }

    #[test]
    fn parents_precede_children() {
        let skeleton = Skeleton::build();
        for (index, joint) in skeleton.joints().iter().enumerate() {
            if let Some(parent) = joint.parent() {
                assert!(parent.index() < index);
                assert!(skeleton
                    .joint(parent)
                    .children()
                    .contains(&JointId(index as u8)));
            }
        }
    }

    #[test]
    fn interactive_set_excludes_leaves_and_root() {
        let skeleton = Skeleton::build();
        let names: Vec<JointName> = skeleton
            .interactive()
            .iter()
            .map(|&id| skeleton.joint(id).name())
            .collect();
        assert_eq!(names, JointName::INTERACTIVE);
        for leaf in [
            JointName::Hips,
            JointName::Head,
            JointName::LeftHand,
            JointName::RightHand,
            JointName::LeftFoot,
            JointName::RightFoot,
        ] {
            assert!(!skeleton.is_interactive(Skeleton::id_of(leaf)));
        }
    }

    #[test]
    fn apply_rotation_converts_degrees() {
        let mut skeleton = Skeleton::build();
        skeleton.apply_rotation("leftElbow", EulerDegrees::new(0.0, 0.0, 90.0));
        let elbow = skeleton.joint(Skeleton::id_of(JointName::LeftElbow));
        assert!((elbow.rotation().z - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(elbow.rotation().x, 0.0);
    }

    #[test]
    fn apply_rotation_ignores_unknown_and_leaf_joints() {
        let mut skeleton = Skeleton::build();
        skeleton.apply_rotation("madeUpJoint", EulerDegrees::new(1.0, 2.0, 3.0));
        skeleton.apply_rotation("head", EulerDegrees::new(10.0, 0.0, 0.0));
        skeleton.apply_rotation("hips", EulerDegrees::new(10.0, 0.0, 0.0));
        assert!(skeleton.joints().iter().all(|j| j.rotation() == DVec3::ZERO));
    }

    #[test]
    fn rebuild_is_independent() {
        let mut first = Skeleton::build();
        first.apply_rotation("torso", EulerDegrees::new(30.0, 0.0, 0.0));
        let second = Skeleton::build();
        assert_eq!(second.len(), 16);
        assert!(second.joints().iter().all(|j| j.rotation() == DVec3::ZERO));
    }

    #[test]
    fn joint_names_parse_from_wire_form() {
        assert_eq!("rightKnee".parse::<JointName>(), Ok(JointName::RightKnee));
        assert!("right_knee".parse::<JointName>().is_err());
    }
}
