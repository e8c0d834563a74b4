//! Error types for JSON to S-expression conversion.

use thiserror::Error;

/// Errors that can occur while converting JSON to S-expression text.
#[derive(Error, Debug)]
pub enum SexpError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout sexp-core.
pub type Result<T> = std::result::Result<T, SexpError>;
