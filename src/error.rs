//! Crate-level error types.

use std::fmt;

/// Errors produced by the quatcam crate.
///
/// The math core is total and never fails; these cover configuration files,
/// replay scripts and animation setup.
#[derive(Debug)]
pub enum QuatcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed input-event replay script.
    Script(String),
    /// A keyframe track was built without any keys.
    EmptyKeyFrames,
}

impl fmt::Display for QuatcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Script(msg) => write!(f, "script error: {msg}"),
            Self::EmptyKeyFrames => {
                write!(f, "keyframe track needs at least one key")
            }
        }
    }
}

impl std::error::Error for QuatcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuatcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
