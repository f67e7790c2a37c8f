//! Error types for the announcement pipeline

use std::io;
use thiserror::Error;

/// Main error type for time-announce
#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// The assembled buffer contains no speech or clip content.
    /// Silence alone is never worth keying up the bridge for.
    #[error("no audio generated")]
    NoAudio,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for announcement operations
pub type Result<T> = std::result::Result<T, AnnounceError>;

impl From<String> for AnnounceError {
    fn from(s: String) -> Self {
        AnnounceError::Other(s)
    }
}

impl From<&str> for AnnounceError {
    fn from(s: &str) -> Self {
        AnnounceError::Other(s.to_string())
    }
}
