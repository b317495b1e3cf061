//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a capture trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Trace not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid trace format in {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

impl TraceError {
    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TraceError::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while assembling a comparison table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("App '{0}' has no actions")]
    EmptyActionSet(String),
}

/// Failure of one (app, feature) unit of work
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("No local device address configured for app '{0}'")]
    UnknownDevice(String),

    /// Shared so every feature of the app can report the same failure
    #[error("Failed to list actions of app '{app}': {source}")]
    Discovery {
        app: String,
        #[source]
        source: Arc<std::io::Error>,
    },
}

/// Errors that can occur while loading the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
