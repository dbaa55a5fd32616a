//! Core error types for numscan.
//!
//! Extraction itself never fails on odd input; these errors cover malformed
//! value objects and configuration I/O.

use thiserror::Error;

/// Errors raised when building shared value types.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NumscanError {
    /// Validation errors (malformed value objects)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumberBlock;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            field: "extraction.min_number_length".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for extraction.min_number_length: must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_from_number_block() {
        let err = NumberBlock::new(7, 7).unwrap_err();
        assert_eq!(
            err,
            NumscanError::Validation("invalid number block: start 7 must be before end 7".to_string())
        );
        assert_eq!(
            err.to_string(),
            "validation error: invalid number block: start 7 must be before end 7"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
