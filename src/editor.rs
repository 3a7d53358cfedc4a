//! Inline pose-text editor model.
//!
//! Holds the text the user edits next to the viewport. The engine resyncs
//! it from the live pose after every change; user edits mark it dirty until
//! they are applied or overwritten.

use crate::error::PoseError;
use crate::pose::PoseData;

/// Editable pose JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoseEditor {
    text: String,
    dirty: bool,
}

impl PoseEditor {
    /// Empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text with the pretty JSON of `pose` and clear the dirty
    /// flag. Unsaved edits are discarded.
    pub fn sync(&mut self, pose: &PoseData) -> Result<(), PoseError> {
        self.text = pose.to_pretty_json()?;
        self.dirty = false;
        Ok(())
    }

    /// Record a user edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text holds edits not yet applied.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Decode the current text.
    pub fn parse(&self) -> Result<PoseData, PoseError> {
        PoseData::from_json_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::EulerDegrees;

    #[test]
    fn sync_writes_pretty_json_and_clears_dirty() {
        let mut pose = PoseData::new();
        pose.insert("torso", EulerDegrees::new(0.0, 15.0, 0.0));

        let mut editor = PoseEditor::new();
        editor.set_text("scratch");
        assert!(editor.is_dirty());

        editor.sync(&pose).unwrap();
        assert!(!editor.is_dirty());
        assert_eq!(
            editor.text(),
            "{\n  \"torso\": {\n    \"x\": 0,\n    \"y\": 15,\n    \"z\": 0\n  }\n}"
        );
    }

    #[test]
    fn parse_reads_edited_text() {
        let mut editor = PoseEditor::new();
        editor.set_text(r#"{"neck": {"x": 5, "y": 0, "z": 0}}"#);
        let pose = editor.parse().unwrap();
        assert_eq!(pose.get("neck"), Some(EulerDegrees::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn parse_rejects_broken_text() {
        let mut editor = PoseEditor::new();
        editor.set_text("{ not json");
        assert!(matches!(editor.parse(), Err(PoseError::MalformedJson(_))));
        assert!(editor.is_dirty());
    }
}
