//! Error taxonomy for the option pipeline

use std::path::PathBuf;

/// Errors raised by the core pipeline and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No compatibility row covers the detected Bundler version
    #[error("Unsupported bundler version: {version}. Supported ranges: {ranges}")]
    UnsupportedVersion { version: String, ranges: String },

    /// Bundler could not be found or its version could not be read
    #[error("{0}")]
    BundlerNotDetected(String),

    /// Registry lookup miss
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Gem name or option value problem the user can correct
    #[error("{0}")]
    Validation(String),

    /// Unreadable or malformed config file
    #[error("Invalid config file at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Registry and compatibility table disagree
    #[error("Internal error: {0}")]
    Internal(String),

    /// The assembled command exited unsuccessfully
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
