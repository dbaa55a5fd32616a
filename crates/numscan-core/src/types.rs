//! Shared types used across numscan.
//!
//! Offsets are byte offsets into the UTF-8 input and always fall on `char`
//! boundaries, so every block can be sliced out of the text directly.

use crate::error::NumscanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Minimum digit count a number needs to be reported when nothing else is configured.
pub const DEFAULT_MIN_NUMBER_LENGTH: usize = 5;

/// Half-open range `[start, end)` of one candidate run of digits and delimiters.
///
/// Only [`NumberBlock::new`] builds one, so `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberBlock {
    start: usize,
    end: usize,
}

impl NumberBlock {
    /// Create a new block.
    ///
    /// # Errors
    /// Returns error if the range is empty or inverted.
    pub fn new(start: usize, end: usize) -> Result<Self, NumscanError> {
        if start >= end {
            return Err(NumscanError::Validation(format!(
                "invalid number block: start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Offset of the first byte of the block.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte of the block.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the block in bytes. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The block as a `Range` for slicing.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice the block out of the text it was scanned from.
    ///
    /// Returns `None` if the block does not fit `text` or does not land on
    /// `char` boundaries (i.e. it came from a different text).
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range())
    }
}

impl fmt::Display for NumberBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A number found in the text, in both display and normalized form.
///
/// Serializes as `{ "originalFormat": ..., "filteredFormat": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedNumber {
    /// Human-readable rendering with `(` or `+` prefixes reattached.
    pub original_format: String,
    /// Digits only, in original order.
    pub filtered_format: String,
}

impl ExtractedNumber {
    /// Create a new record.
    #[must_use]
    pub fn new(original_format: impl Into<String>, filtered_format: impl Into<String>) -> Self {
        Self {
            original_format: original_format.into(),
            filtered_format: filtered_format.into(),
        }
    }

    /// Number of digits in the normalized form.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.filtered_format.chars().count()
    }
}

impl fmt::Display for ExtractedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.original_format, self.filtered_format)
    }
}
