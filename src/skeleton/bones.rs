use super::joint::JointName;

/// A parent → child joint pair drawn as one limb segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
    /// Joint the segment starts at.
    pub parent: JointName,
    /// Joint the segment ends at.
    pub child: JointName,
}

const fn bone(parent: JointName, child: JointName) -> Bone {
    Bone { parent, child }
}

/// The fifteen limb segments of the figure, spine first, then arms, then
/// legs.
pub const BONES: [Bone; 15] = [
    bone(JointName::Hips, JointName::Torso),
    bone(JointName::Torso, JointName::Neck),
    bone(JointName::Neck, JointName::Head),
    bone(JointName::Torso, JointName::LeftShoulder),
    bone(JointName::LeftShoulder, JointName::LeftElbow),
    bone(JointName::LeftElbow, JointName::LeftHand),
    bone(JointName::Torso, JointName::RightShoulder),
    bone(JointName::RightShoulder, JointName::RightElbow),
    bone(JointName::RightElbow, JointName::RightHand),
    bone(JointName::Hips, JointName::LeftHip),
    bone(JointName::LeftHip, JointName::LeftKnee),
    bone(JointName::LeftKnee, JointName::LeftFoot),
    bone(JointName::Hips, JointName::RightHip),
    bone(JointName::RightHip, JointName::RightKnee),
    bone(JointName::RightKnee, JointName::RightFoot),
];
