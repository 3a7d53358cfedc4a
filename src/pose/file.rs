//! Pose files on disk.

use std::path::{Path, PathBuf};

use super::data::PoseData;
use crate::error::PoseError;

/// File name used when exporting the live pose.
pub const EXPORT_FILE_NAME: &str = "stick-figure-pose.json";

/// Write `pose` as pretty-printed JSON to `dir/stick-figure-pose.json`,
/// creating `dir` if needed. Returns the written path.
pub fn save_pose(dir: &Path, pose: &PoseData) -> Result<PathBuf, PoseError> {
    let content = pose.to_pretty_json()?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, content)?;
    log::info!("exported pose ({} joints) to {}", pose.len(), path.display());
    Ok(path)
}

/// Read and permissively decode a pose file.
///
/// Fails with [`PoseError::Io`] if the file cannot be read and with
/// [`PoseError::MalformedJson`] if its text is not JSON.
pub fn load_pose(path: &Path) -> Result<PoseData, PoseError> {
    let content = std::fs::read_to_string(path)?;
    let pose = PoseData::from_json_str(&content)?;
    log::info!("loaded pose ({} entries) from {}", pose.len(), path.display());
    Ok(pose)
}
