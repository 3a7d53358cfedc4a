//! Forward kinematics: world-space placement of every joint.
//!
//! A joint's world transform is its parent's world transform applied to
//! (translate by the local offset, then rotate by the local rotation).
//! The whole figure is re-evaluated every frame; with sixteen joints that
//! is cheaper than tracking which subtrees changed.

use glam::{Quat, Vec3};

use crate::skeleton::{JointId, Skeleton};

/// World-space placement of one joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// Joint origin in world space.
    pub position: Vec3,
    /// Accumulated orientation of the joint's frame.
    pub orientation: Quat,
}

impl WorldTransform {
    /// Origin with no rotation; the frame the root hangs from.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Transform of a child whose frame is offset by `offset` (expressed in
    /// this frame) and then rotated by `local`.
    #[must_use]
    pub fn child(&self, offset: Vec3, local: Quat) -> Self {
        Self {
            position: self.position + self.orientation * offset,
            orientation: self.orientation * local,
        }
    }
}

/// World transforms for every joint, indexed like the skeleton arena.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPose {
    transforms: Vec<WorldTransform>,
}

impl WorldPose {
    /// Evaluate the skeleton's current rotations.
    #[must_use]
    pub fn evaluate(skeleton: &Skeleton) -> Self {
        let mut pose = Self {
            transforms: vec![WorldTransform::IDENTITY; skeleton.len()],
        };
        pose.recompute(skeleton);
        pose
    }

    /// Re-evaluate in place, reusing the existing storage.
    pub fn recompute(&mut self, skeleton: &Skeleton) {
        self.transforms
            .resize(skeleton.len(), WorldTransform::IDENTITY);
        // Arena order puts parents first, so one forward pass suffices.
        for (index, joint) in skeleton.joints().iter().enumerate() {
            let parent = joint
                .parent()
                .map_or(WorldTransform::IDENTITY, |p| self.transforms[p.index()]);
            self.transforms[index] =
                parent.child(joint.offset(), joint.local_orientation());
        }
    }

    /// Full transform of a joint.
    #[must_use]
    pub fn get(&self, id: JointId) -> WorldTransform {
        self.transforms[id.index()]
    }

    /// World position of a joint.
    #[must_use]
    pub fn position(&self, id: JointId) -> Vec3 {
        self.transforms[id.index()].position
    }

    /// World orientation of a joint.
    #[must_use]
    pub fn orientation(&self, id: JointId) -> Quat {
        self.transforms[id.index()].orientation
    }

    /// All transforms in arena order.
    #[must_use]
    pub fn transforms(&self) -> &[WorldTransform] {
        &self.transforms
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::pose::EulerDegrees;
    use crate::skeleton::JointName;

    fn pos(world: &WorldPose, name: JointName) -> Vec3 {
        world.position(Skeleton::id_of(name))
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a:?} != {b:?}");
    }

    #[test]
    fn rest_pose_positions_are_offset_sums() {
        let world = WorldPose::evaluate(&Skeleton::build());
        assert_close(pos(&world, JointName::Hips), Vec3::new(0.0, 1.0, 0.0));
        assert_close(pos(&world, JointName::Torso), Vec3::new(0.0, 1.5, 0.0));
        assert_close(pos(&world, JointName::Head), Vec3::new(0.0, 2.2, 0.0));
        assert_close(
            pos(&world, JointName::LeftHand),
            Vec3::new(0.3, 0.6, 0.0),
        );
        assert_close(
            pos(&world, JointName::RightFoot),
            Vec3::new(-0.15, -0.1, 0.0),
        );
    }

    #[test]
    fn rotation_moves_descendants_not_the_joint() {
        let mut skeleton = Skeleton::build();
        skeleton
            .apply_rotation("leftShoulder", EulerDegrees::new(0.0, 0.0, 90.0));
        let world = WorldPose::evaluate(&skeleton);

        // The shoulder itself stays put; the arm swings from -Y to +X.
        assert_close(
            pos(&world, JointName::LeftShoulder),
            Vec3::new(0.3, 1.5, 0.0),
        );
        assert_close(
            pos(&world, JointName::LeftElbow),
            Vec3::new(0.8, 1.5, 0.0),
        );
        assert_close(pos(&world, JointName::LeftHand), Vec3::new(1.2, 1.5, 0.0));
        // The other arm is untouched.
        assert_close(
            pos(&world, JointName::RightHand),
            Vec3::new(-0.3, 0.6, 0.0),
        );
    }

    #[test]
    fn rotations_compose_down_the_chain() {
        let mut skeleton = Skeleton::build();
        skeleton.apply_rotation("torso", EulerDegrees::new(0.0, 90.0, 0.0));
        skeleton.apply_rotation("leftShoulder", EulerDegrees::new(0.0, 0.0, 90.0));
        let world = WorldPose::evaluate(&skeleton);

        // Torso yaw of 90 degrees turns local +X into world -Z.
        assert_close(
            pos(&world, JointName::LeftShoulder),
            Vec3::new(0.0, 1.5, -0.3),
        );
        assert_close(
            pos(&world, JointName::LeftElbow),
            Vec3::new(0.0, 1.5, -0.8),
        );
        let expected = Quat::from_rotation_y(FRAC_PI_2)
            * Quat::from_rotation_z(FRAC_PI_2);
        assert!(world
            .orientation(Skeleton::id_of(JointName::LeftShoulder))
            .abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn recompute_tracks_rotation_changes() {
        let mut skeleton = Skeleton::build();
        let mut world = WorldPose::evaluate(&skeleton);
        let rest = pos(&world, JointName::LeftFoot);

        skeleton.apply_rotation("leftHip", EulerDegrees::new(90.0, 0.0, 0.0));
        world.recompute(&skeleton);
        assert_ne!(pos(&world, JointName::LeftFoot), rest);
        // Pitching the hip by 90 degrees about X swings the leg to -Z.
        assert_close(
            pos(&world, JointName::LeftFoot),
            Vec3::new(0.15, 1.0, -1.1),
        );
    }
}
