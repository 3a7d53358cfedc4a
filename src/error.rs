//! Crate-level error types.

use std::fmt;

/// Errors produced by the stickpose crate.
#[derive(Debug)]
pub enum PoseError {
    /// Pose text that is not valid JSON. Never applied.
    MalformedJson(serde_json::Error),
    /// Generic I/O failure while reading or writing a pose or options file.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The render surface failed to initialize or present a frame.
    Surface(String),
    /// An input listener could not be registered with the event source.
    Listener(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson(e) => write!(f, "malformed pose JSON: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Surface(msg) => write!(f, "render surface error: {msg}"),
            Self::Listener(msg) => {
                write!(f, "failed to register input listener: {msg}")
            }
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedJson(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedJson(e)
    }
}

impl From<std::io::Error> for PoseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
