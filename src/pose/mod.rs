//! Pose interchange: the serializable [`PoseData`] mapping, conversion to
//! and from live joint rotations, and pose files.
//!
//! Decoding is deliberately permissive. Only text that fails to parse as
//! JSON is rejected; every structurally odd but parseable document is
//! reduced to whatever entries make sense (see [`PoseData::from_value`]).

mod codec;
mod data;
mod file;

pub use codec::{export_pose, import_pose};
pub use data::{EulerDegrees, PoseData};
pub use file::{load_pose, save_pose, EXPORT_FILE_NAME};
