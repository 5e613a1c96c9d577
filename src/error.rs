//! Error types for websearch-intercept
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the hook
#[derive(Debug, Error)]
pub enum HookError {
    /// Stdin could not be parsed as a tool-use event; the only fatal error
    #[error("Malformed tool event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    /// Decision serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hook operations
pub type Result<T> = std::result::Result<T, HookError>;
