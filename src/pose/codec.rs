//! Conversion between live joint rotations and [`PoseData`].

use super::data::{EulerDegrees, PoseData};
use crate::skeleton::Skeleton;

/// Snapshot the interactive joints' rotations, in export order, as whole
/// degrees.
#[must_use]
pub fn export_pose(skeleton: &Skeleton) -> PoseData {
    let mut pose = PoseData::new();
    for &id in skeleton.interactive() {
        let joint = skeleton.joint(id);
        pose.insert(
            joint.name().as_str(),
            EulerDegrees::from_radians(joint.rotation()).rounded(),
        );
    }
    pose
}

/// Merge `pose` into the skeleton.
///
/// Joints absent from `pose` keep their rotation; names the skeleton does
/// not recognize (or cannot rotate) are ignored. Callers must re-run
/// forward kinematics afterwards.
pub fn import_pose(skeleton: &mut Skeleton, pose: &PoseData) {
    for (name, rotation) in pose.iter() {
        skeleton.apply_rotation(name, rotation);
    }
}
