//! CPU joint picking.
//!
//! A screen position is turned into a world-space ray (see
//! [`Camera::screen_ray`](crate::camera::Camera::screen_ray)) and tested
//! against a sphere around every interactive joint. Leaf joints and the
//! root are never pickable.

mod ray;

use glam::Vec3;
pub use ray::{ray_sphere_intersect, Ray};

use crate::kinematics::WorldPose;
use crate::skeleton::{JointId, Skeleton};

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointHit {
    /// The joint whose hit sphere was struck.
    pub joint: JointId,
    /// Distance from the ray origin to the hit.
    pub distance: f32,
}

/// Nearest interactive joint along `ray`, if any.
#[must_use]
pub fn pick_joint(
    ray: &Ray,
    skeleton: &Skeleton,
    world: &WorldPose,
) -> Option<JointHit> {
    skeleton
        .interactive()
        .iter()
        .filter_map(|&joint| {
            let radius = skeleton.joint(joint).marker_radius()?;
            let center: Vec3 = world.position(joint);
            ray_sphere_intersect(ray, center, radius)
                .map(|distance| JointHit { joint, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
