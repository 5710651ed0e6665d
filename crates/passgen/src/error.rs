//! Error types and result alias for password generation.
use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type used throughout this crate.
pub type Result<T> = StdResult<T, GenerationError>;

/// The secure random source failed to deliver the requested bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("secure random source failed: {message}")]
pub struct RandomSourceError {
    /// Message reported by the underlying provider.
    pub message: String,
}

impl RandomSourceError {
    /// Build an error from any provider message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure of a single generation attempt.
///
/// Both variants are local to one call: the configuration is never touched by
/// generation, so there is nothing to roll back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No character class is enabled, or only `special` is enabled with an
    /// empty alphabet.
    #[error("no characters selected")]
    EmptyCharset,
    /// The platform random source could not supply the bytes.
    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),
}
