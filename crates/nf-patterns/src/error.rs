//! Error types for pattern generation.

use thiserror::Error;

/// Result type for pattern generation.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors a pattern family can report instead of a question.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A parameter table the family draws from is empty.
    #[error("empty parameter table: {0}")]
    EmptyTable(&'static str),

    /// A drawn parameter is outside the range the family can render.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}
