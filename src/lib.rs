// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D stick-figure posing core.
//!
//! A fixed humanoid skeleton is posed by dragging its joints; the pose is
//! exchanged as JSON (joint name → Euler angles in degrees) and can be
//! re-imported without drift.
//!
//! # Key entry points
//!
//! - [`engine::PoseEngine`] - owns the figure, camera and drag state and
//!   turns input events into pose changes
//! - [`skeleton::Skeleton`] - the joint arena with fixed offsets
//! - [`kinematics::WorldPose`] - forward kinematics
//! - [`segments::LimbSegments`] - per-bone render transforms
//! - [`pose::PoseData`] - the interchange format and its permissive decoder
//! - [`host::Session`] - scoped ownership of a render surface and its input
//!   listeners
//!
//! # Frame flow
//!
//! Every frame the engine re-evaluates forward kinematics and re-derives
//! the limb segments unconditionally; the figure has sixteen joints, so
//! there is no dirty tracking. Rotations change only through a joint drag
//! or a pose import.

pub mod camera;
pub mod editor;
pub mod engine;
pub mod error;
pub mod frame;
pub mod host;
pub mod input;
pub mod kinematics;
pub mod options;
pub mod picking;
pub mod pose;
pub mod segments;
pub mod skeleton;

pub use engine::PoseEngine;
pub use error::PoseError;
pub use input::{InputEvent, MouseButton};
pub use pose::{EulerDegrees, PoseData};
