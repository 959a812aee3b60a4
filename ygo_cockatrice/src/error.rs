//! Error types for ygo_cockatrice

use thiserror::Error;
use ygo_common::RecordError;

/// Unified error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A single card record could not be mapped
    #[error("Invalid card record: {0}")]
    Record(#[from] RecordError),
    /// Rendering the document or writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The identifier namespace given on the command line is not a UUID
    #[error("Invalid UUID namespace: {0}")]
    InvalidNamespace(String),
}

/// Result alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
