//! Graph document error types.
//!
//! Every variant that comes from a file carries its path, so a bad
//! `--graph` argument can be traced back without re-running with logging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors while reading a graph document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The graph file does not exist.
    #[error("graph file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A node id, metric name, or weight in the document is invalid.
    #[error("invalid graph document: {0}")]
    Validation(#[from] rota_core::ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic serde_yaml error (not file-specific).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
