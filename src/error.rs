//! Error types for the ambient configuration layer.
//!
//! The transition core never fails; only loading configuration can.

use thiserror::Error;

/// Errors that can occur while loading an [`EditorConfig`](crate::config::EditorConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment override that does not parse
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Value out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
