//! Error types for data-source operations.

use thiserror::Error;

/// Result type for data-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised by the data-source adapters.
///
/// None of these is ever fatal: the gather step substitutes a placeholder
/// line item so the dashboard always renders something. Keeping the error
/// explicit (instead of swallowing it inside each adapter) makes that
/// policy a testable function.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request to an upstream API failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A bounded per-call timeout elapsed.
    #[error("Source timed out: {0}")]
    Timeout(String),

    /// Upstream response was missing a required field.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// External tool invocation failed.
    #[error("Subprocess failed: {0}")]
    Process(String),

    /// File read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
