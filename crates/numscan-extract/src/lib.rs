//! Numscan Extract - Phone-number-like digit runs from free-form text.
//!
//! Listing and classified-ad text carries phone numbers in every format people
//! type: `0254 123 123`, `(123) 456-789-123`, `+420 254 123 123`. This crate
//! finds those runs, skips digits that belong to URLs, and reports each number
//! twice: as written and reduced to digits for matching and deduplication.
//!
//! # Pipeline
//!
//! 1. [`scanner`] walks the text once and emits candidate [`NumberBlock`]s
//! 2. [`uri`] drops blocks whose enclosing token is a URL
//! 3. Raw strings are deduplicated in order of first appearance
//! 4. Blocks with fewer digits than the threshold are dropped
//! 5. [`format`] renders each survivor as an [`ExtractedNumber`]
//!
//! # Example
//!
//! ```rust
//! use numscan_extract::{clean_number, extract_numbers};
//!
//! let numbers = extract_numbers("Contact Us On +420 254 123 123 + click to reveal", 5);
//! assert_eq!(numbers[0].original_format, "+420 254 123 123");
//! assert_eq!(numbers[0].filtered_format, "420254123123");
//!
//! assert_eq!(clean_number("(420) 123-456-789"), "420123456789");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod delimiter;
pub mod error;
pub mod extractor;
pub mod format;
pub mod scanner;
pub mod uri;

// Re-export commonly used types
pub use delimiter::{escape_for_literal_match, is_digit, is_plus, DelimiterRole, DelimiterSet};
pub use error::{ExtractError, Result};
pub use extractor::{extract_numbers, NumberExtractor};
pub use format::{clean_number, original_format};
pub use numscan_core::{AppConfig, ExtractedNumber, NumberBlock, DEFAULT_MIN_NUMBER_LENGTH};
pub use scanner::scan_blocks;
pub use uri::{enclosing_token, exclude_urls, StandardUrlValidator, UrlValidator};
