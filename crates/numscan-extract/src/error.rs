//! Error types for extractor construction.

use numscan_core::ConfigError;
use thiserror::Error;

/// Errors raised while building an extractor. Extraction itself is infallible.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A delimiter cannot be registered in the requested role
    #[error("invalid delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter {
        /// The offending character
        delimiter: char,
        /// Why it was refused
        reason: String,
    },

    /// The strip pattern built from the delimiter table did not compile
    #[error("failed to compile delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Caller passed an argument the extractor cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be used
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;
