//! Numscan Core - Foundation crate for the numscan extractor.
//!
//! This crate provides the shared types, error handling and configuration
//! management that the extraction crate builds on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared value types (`NumberBlock`, `ExtractedNumber`)
//!
//! # Example
//!
//! ```rust
//! use numscan_core::{AppConfig, DEFAULT_MIN_NUMBER_LENGTH};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.extraction.min_number_length, DEFAULT_MIN_NUMBER_LENGTH);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ExtractionConfig, PairConfig, UriConfig};
pub use error::{ConfigError, ConfigResult, NumscanError};
pub use types::{ExtractedNumber, NumberBlock, DEFAULT_MIN_NUMBER_LENGTH};
