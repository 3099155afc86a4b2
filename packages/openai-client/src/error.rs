//! Error types for the OpenAI client.

use thiserror::Error;

/// Errors that can occur when calling the OpenAI API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Client is misconfigured (e.g. missing API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Network-level failure (connection refused, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for OpenAI operations.
pub type Result<T> = std::result::Result<T, OpenAiError>;
