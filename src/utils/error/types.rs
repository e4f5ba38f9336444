//! Error types for the bulk processor

use thiserror::Error;

/// Result type alias for the bulk processor
pub type Result<T> = std::result::Result<T, BulkError>;

/// Main error type for the bulk processor
#[derive(Error, Debug)]
pub enum BulkError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Transport errors raised by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bulk response could not be parsed or classified
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Operation could not be encoded as NDJSON
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Caller supplied an operation that can never be accepted
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
