//! Options methods for [`PoseEngine`].

use super::PoseEngine;
use crate::options::Options;

impl PoseEngine {
    /// Replace options and push the changes to the camera and drag
    /// controller. Appearance settings are read when the next frame is
    /// assembled.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    fn apply_options(&mut self) {
        self.camera.apply_options(&self.options.camera);
        self.drag
            .set_sensitivity(self.options.interaction.drag_sensitivity);
    }
}
