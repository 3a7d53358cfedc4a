use std::fmt;
use std::str::FromStr;

use glam::{DQuat, DVec3, EulerRot, Quat, Vec3};

/// Index of a joint inside a [`Skeleton`](super::Skeleton) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(pub(crate) u8);

impl JointId {
    /// Position of the joint in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The closed set of joints making up the figure.
///
/// Wire names (used in pose JSON) are camelCase: `leftShoulder`,
/// `rightKnee`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointName {
    /// Root of the tree. Never rotated by the user.
    Hips,
    /// Lower spine; parent of the neck and both shoulders.
    Torso,
    /// Base of the neck.
    Neck,
    /// Leaf above the neck.
    Head,
    /// Left shoulder.
    LeftShoulder,
    /// Left elbow.
    LeftElbow,
    /// Left hand (leaf).
    LeftHand,
    /// Right shoulder.
    RightShoulder,
    /// Right elbow.
    RightElbow,
    /// Right hand (leaf).
    RightHand,
    /// Left hip socket.
    LeftHip,
    /// Left knee.
    LeftKnee,
    /// Left foot (leaf).
    LeftFoot,
    /// Right hip socket.
    RightHip,
    /// Right knee.
    RightKnee,
    /// Right foot (leaf).
    RightFoot,
}

impl JointName {
    /// Every joint, parents before children. This is also arena order.
    pub const ALL: [Self; 16] = [
        Self::Hips,
        Self::Torso,
        Self::Neck,
        Self::Head,
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::LeftHand,
        Self::RightShoulder,
        Self::RightElbow,
        Self::RightHand,
        Self::LeftHip,
        Self::LeftKnee,
        Self::LeftFoot,
        Self::RightHip,
        Self::RightKnee,
        Self::RightFoot,
    ];

    /// User-controllable joints, in pose export order.
    pub const INTERACTIVE: [Self; 10] = [
        Self::Torso,
        Self::Neck,
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::RightShoulder,
        Self::RightElbow,
        Self::LeftHip,
        Self::LeftKnee,
        Self::RightHip,
        Self::RightKnee,
    ];

    /// Wire name used in pose data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hips => "hips",
            Self::Torso => "torso",
            Self::Neck => "neck",
            Self::Head => "head",
            Self::LeftShoulder => "leftShoulder",
            Self::LeftElbow => "leftElbow",
            Self::LeftHand => "leftHand",
            Self::RightShoulder => "rightShoulder",
            Self::RightElbow => "rightElbow",
            Self::RightHand => "rightHand",
            Self::LeftHip => "leftHip",
            Self::LeftKnee => "leftKnee",
            Self::LeftFoot => "leftFoot",
            Self::RightHip => "rightHip",
            Self::RightKnee => "rightKnee",
            Self::RightFoot => "rightFoot",
        }
    }

    /// Whether the joint's rotation is exposed to the user.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        Self::INTERACTIVE.contains(&self)
    }

    /// Parent joint and fixed local offset.
    pub(crate) const fn rest(self) -> (Option<Self>, Vec3) {
        match self {
            Self::Hips => (None, Vec3::new(0.0, 1.0, 0.0)),
            Self::Torso => (Some(Self::Hips), Vec3::new(0.0, 0.5, 0.0)),
            Self::Neck => (Some(Self::Torso), Vec3::new(0.0, 0.5, 0.0)),
            Self::Head => (Some(Self::Neck), Vec3::new(0.0, 0.2, 0.0)),
            Self::LeftShoulder => {
                (Some(Self::Torso), Vec3::new(0.3, 0.0, 0.0))
            }
            Self::RightShoulder => {
                (Some(Self::Torso), Vec3::new(-0.3, 0.0, 0.0))
            }
            Self::LeftElbow => {
                (Some(Self::LeftShoulder), Vec3::new(0.0, -0.5, 0.0))
            }
            Self::RightElbow => {
                (Some(Self::RightShoulder), Vec3::new(0.0, -0.5, 0.0))
            }
            Self::LeftHand => {
                (Some(Self::LeftElbow), Vec3::new(0.0, -0.4, 0.0))
            }
            Self::RightHand => {
                (Some(Self::RightElbow), Vec3::new(0.0, -0.4, 0.0))
            }
            Self::LeftHip => (Some(Self::Hips), Vec3::new(0.15, 0.0, 0.0)),
            Self::RightHip => (Some(Self::Hips), Vec3::new(-0.15, 0.0, 0.0)),
            Self::LeftKnee => (Some(Self::LeftHip), Vec3::new(0.0, -0.6, 0.0)),
            Self::RightKnee => {
                (Some(Self::RightHip), Vec3::new(0.0, -0.6, 0.0))
            }
            Self::LeftFoot => {
                (Some(Self::LeftKnee), Vec3::new(0.0, -0.5, 0.0))
            }
            Self::RightFoot => {
                (Some(Self::RightKnee), Vec3::new(0.0, -0.5, 0.0))
            }
        }
    }

    /// Radius of the sphere drawn (and, for interactive joints, picked)
    /// at the joint. The root carries no marker.
    pub(crate) const fn marker_radius(self) -> Option<f32> {
        match self {
            Self::Hips => None,
            Self::Head => Some(0.2),
            Self::Neck
            | Self::LeftHand
            | Self::RightHand
            | Self::LeftFoot
            | Self::RightFoot => Some(0.08),
            _ => Some(0.1),
        }
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the sixteen wire names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJoint(pub String);

impl fmt::Display for UnknownJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown joint name: {}", self.0)
    }
}

impl std::error::Error for UnknownJoint {}

impl FromStr for JointName {
    type Err = UnknownJoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownJoint(s.to_owned()))
    }
}

/// One node of the skeleton arena.
#[derive(Debug, Clone)]
pub struct Joint {
    name: JointName,
    parent: Option<JointId>,
    children: Vec<JointId>,
    offset: Vec3,
    /// XYZ Euler angles in radians. Kept in f64 so very large imported
    /// angles stay finite.
    rotation: DVec3,
    marker_radius: Option<f32>,
}

impl Joint {
    pub(crate) fn new(
        name: JointName,
        parent: Option<JointId>,
        offset: Vec3,
    ) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            offset,
            rotation: DVec3::ZERO,
            marker_radius: name.marker_radius(),
        }
    }

    /// Joint identity.
    #[must_use]
    pub fn name(&self) -> JointName {
        self.name
    }

    /// Parent joint; `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<JointId> {
        self.parent
    }

    /// Direct children, in construction order.
    #[must_use]
    pub fn children(&self) -> &[JointId] {
        &self.children
    }

    /// Fixed translation from the parent joint, in the parent's frame.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Local XYZ Euler rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    /// Local rotation as a quaternion (`Rx * Ry * Rz`).
    ///
    /// Evaluated in f64 and narrowed afterwards, so the result is finite
    /// for any finite angle.
    #[must_use]
    pub fn local_orientation(&self) -> Quat {
        DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
        .as_quat()
    }

    /// Radius of the joint's marker sphere, if it has one.
    #[must_use]
    pub fn marker_radius(&self) -> Option<f32> {
        self.marker_radius
    }

    pub(crate) fn push_child(&mut self, child: JointId) {
        self.children.push(child);
    }

    pub(crate) fn set_rotation(&mut self, rotation: DVec3) {
        self.rotation = rotation;
    }
}
