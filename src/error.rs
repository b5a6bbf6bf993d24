//! Error types for Bistro.
//!
//! Palette resolution and rendering are infallible; errors only come from
//! the terminal and the optional log file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Bistro operations.
pub type Result<T> = std::result::Result<T, BistroError>;

/// Errors that can occur in Bistro.
#[derive(Debug, Error)]
pub enum BistroError {
    /// Failed to open the log file.
    #[error("Failed to open log file: {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl BistroError {
    /// Create a LogFile error.
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile { path, source }
    }
}
