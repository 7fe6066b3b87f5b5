//! Error types for the command-line encoder.

use meshmsg_access::MessageError;
use thiserror::Error;

/// Errors that can occur while running the encoder.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for [`CliConfig`](crate::CliConfig).
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Configuration parsed but is inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Message could not be built.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// No application key was selected.
    #[error("no application key: pass --key, or --key-index with a config file")]
    MissingKey,

    /// JSON output failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
