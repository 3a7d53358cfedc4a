//! Camera system for viewing the figure.
//!
//! Provides a perspective camera with screen-ray casting and an orbital
//! controller whose input can be locked while a joint is being dragged.

/// Orbital camera controller and the orbit lock it exposes.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::{OrbitCamera, OrbitLock};
pub use self::core::{Camera, CameraUniform};
