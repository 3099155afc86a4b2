//! Typed errors for the comparison pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// Keyword list failed validation
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Template rendering failed
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive construction failed
    #[error("packaging error: {0}")]
    Packaging(#[from] zip::result::ZipError),
}

/// Errors from the text-generation capability.
///
/// Timeouts, auth failures, and rate limits all collapse into this kind;
/// the pipeline treats them uniformly.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request never completed (connection failure, timeout)
    #[error("generation request failed: {0}")]
    Network(String),

    /// Upstream API rejected the request or returned garbage
    #[error("generation API error: {0}")]
    Api(String),

    /// Upstream returned an empty completion
    #[error("empty completion")]
    EmptyCompletion,
}

/// Failure of a single content block for one pair.
///
/// Always recovered by substituting that block's fallback copy; never
/// aborts the pair or the run.
#[derive(Debug, Error)]
pub enum BlockError {
    /// Generation call failed
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Response text did not match the expected schema
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ComparisonError>;
