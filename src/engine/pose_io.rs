//! Pose import/export for [`PoseEngine`].
//!
//! Every successful import re-runs forward kinematics and the limb
//! segments immediately, resyncs the editor and notifies listeners.
//! Rejected input leaves the live pose untouched.

use std::path::{Path, PathBuf};

use super::{PoseEngine, PoseListener};
use crate::error::PoseError;
use crate::pose::{self, PoseData};

impl PoseEngine {
    /// Register a callback fired with the exported pose after every pose
    /// change (each drag move and each import).
    pub fn on_pose_update(&mut self, listener: PoseListener) {
        self.listeners.push(listener);
    }

    /// Snapshot the live pose.
    #[must_use]
    pub fn export_pose(&self) -> PoseData {
        pose::export_pose(&self.skeleton)
    }

    /// Merge `pose` into the figure.
    pub fn import_pose(&mut self, pose: &PoseData) {
        pose::import_pose(&mut self.skeleton, pose);
        self.refresh_figure();
        self.pose_changed();
    }

    /// Parse pose text and merge it into the figure.
    pub fn import_json(&mut self, text: &str) -> Result<(), PoseError> {
        let pose = PoseData::from_json_str(text).inspect_err(|e| {
            log::warn!("rejected pose text: {e}");
        })?;
        self.import_pose(&pose);
        Ok(())
    }

    /// Load a pose file and merge it into the figure.
    pub fn load_pose_file(&mut self, path: &Path) -> Result<(), PoseError> {
        let pose = pose::load_pose(path).inspect_err(|e| {
            log::warn!("rejected pose file {}: {e}", path.display());
        })?;
        self.import_pose(&pose);
        Ok(())
    }

    /// Write the live pose to `dir/stick-figure-pose.json`.
    pub fn save_pose_file(&self, dir: &Path) -> Result<PathBuf, PoseError> {
        pose::save_pose(dir, &self.export_pose())
    }

    /// Apply the editor's text to the figure.
    ///
    /// On failure the error is returned for the host to report, the live
    /// pose is unchanged and the user's text is kept for correction.
    pub fn apply_editor(&mut self) -> Result<(), PoseError> {
        let pose = self.editor.parse().inspect_err(|e| {
            log::warn!("rejected editor text: {e}");
        })?;
        self.import_pose(&pose);
        Ok(())
    }
}
