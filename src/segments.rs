//! Limb segments: one renderable transform per bone.
//!
//! Each segment is a unit cylinder along +Y that gets centred between the
//! two joints, stretched to their distance, and turned to point from the
//! parent to the child.

use glam::{Mat4, Quat, Vec3};

use crate::kinematics::WorldPose;
use crate::skeleton::{Bone, Skeleton, BONES};

/// Axis the canonical segment mesh is built along.
pub const SEGMENT_AXIS: Vec3 = Vec3::Y;

/// Render transform for one bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbSegment {
    /// Which joints the segment connects.
    pub bone: Bone,
    /// Midpoint between the two joints.
    pub translation: Vec3,
    /// Rotation taking [`SEGMENT_AXIS`] onto the parent → child direction.
    pub orientation: Quat,
    /// Distance between the joints; the scale along the segment axis.
    pub length: f32,
}

impl LimbSegment {
    fn new(bone: Bone) -> Self {
        Self {
            bone,
            translation: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            length: 0.0,
        }
    }

    /// Re-derive the transform from the endpoints' world positions.
    ///
    /// Coincident endpoints have no direction, so the orientation keeps its
    /// last value; midpoint and length are still refreshed.
    pub fn update_from_endpoints(&mut self, start: Vec3, end: Vec3) {
        let diff = end - start;
        self.translation = (start + end) * 0.5;
        self.length = diff.length();

        let length_sq = diff.length_squared();
        if length_sq > 0.0 {
            let direction = diff / length_sq.sqrt();
            self.orientation = Quat::from_rotation_arc(SEGMENT_AXIS, direction);
        }
    }

    /// Model matrix for a unit cylinder of radius 1 and height 1 centred
    /// at the origin along +Y: translate * rotate * scale.
    #[must_use]
    pub fn model_matrix(&self, radius: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(radius, self.length, radius),
            self.orientation,
            self.translation,
        )
    }
}

/// Segments for all fifteen bones, in [`BONES`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbSegments {
    segments: Vec<LimbSegment>,
}

impl LimbSegments {
    /// Segments with identity orientation and zero length; call
    /// [`update`](Self::update) before the first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: BONES.iter().copied().map(LimbSegment::new).collect(),
        }
    }

    /// Re-derive every segment from the latest forward-kinematics pass.
    pub fn update(&mut self, world: &WorldPose) {
        for segment in &mut self.segments {
            let start = world.position(Skeleton::id_of(segment.bone.parent));
            let end = world.position(Skeleton::id_of(segment.bone.child));
            segment.update_from_endpoints(start, end);
        }
    }

    /// All segments.
    #[must_use]
    pub fn as_slice(&self) -> &[LimbSegment] {
        &self.segments
    }

    /// Number of segments (always fifteen).
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for LimbSegments {
    fn default() -> Self {
        Self::new()
    }
}
