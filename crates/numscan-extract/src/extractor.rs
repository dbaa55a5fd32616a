//! Extraction pipeline: scan, drop URL blocks, deduplicate, threshold, format.

use crate::delimiter::DelimiterSet;
use crate::error::{ExtractError, Result};
use crate::format::format_number;
use crate::scanner::scan_blocks;
use crate::uri::{exclude_urls, StandardUrlValidator, UrlValidator};
use numscan_core::{AppConfig, ExtractedNumber, DEFAULT_MIN_NUMBER_LENGTH};
use std::collections::HashSet;
use std::fmt;

static DEFAULT_VALIDATOR: StandardUrlValidator = StandardUrlValidator::new(true);

/// Extract numbers from `text` with the standard delimiters and URL validator.
///
/// Returns an empty list for empty text or a zero threshold.
#[must_use]
pub fn extract_numbers(text: &str, min_number_length: usize) -> Vec<ExtractedNumber> {
    run_pipeline(
        text,
        min_number_length,
        DelimiterSet::standard_ref(),
        Some(&DEFAULT_VALIDATOR as &dyn UrlValidator),
    )
}

/// Configurable extractor.
///
/// ```rust
/// use numscan_extract::NumberExtractor;
///
/// let extractor = NumberExtractor::new().with_min_number_length(9).unwrap();
/// let numbers = extractor.extract("Call (123) 456-789-123 or 0254 123");
/// assert_eq!(numbers.len(), 1);
/// assert_eq!(numbers[0].filtered_format, "123456789123");
/// ```
pub struct NumberExtractor {
    delimiters: DelimiterSet,
    min_number_length: usize,
    validator: Option<Box<dyn UrlValidator>>,
}

impl fmt::Debug for NumberExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberExtractor")
            .field("delimiters", &self.delimiters)
            .field("min_number_length", &self.min_number_length)
            .field("url_filter", &self.validator.is_some())
            .finish()
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberExtractor {
    /// Standard delimiters, a threshold of five digits and URL exclusion with bare hosts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: DelimiterSet::standard(),
            min_number_length: DEFAULT_MIN_NUMBER_LENGTH,
            validator: Some(Box::new(StandardUrlValidator::default())),
        }
    }

    /// Build an extractor from loaded configuration.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or names an unusable delimiter.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let mut delimiters = DelimiterSet::standard();
        for &c in &config.extraction.extra_single_delimiters {
            delimiters = delimiters.with_single(c)?;
        }
        for pair in &config.extraction.extra_pairs {
            delimiters = delimiters.with_pair(pair.open, pair.close)?;
        }

        let validator: Option<Box<dyn UrlValidator>> = if config.uri.exclude_urls {
            Some(Box::new(StandardUrlValidator::new(config.uri.allow_bare_hosts)))
        } else {
            None
        };

        tracing::debug!(
            "Built extractor: min_number_length={}, url_filter={}",
            config.extraction.min_number_length,
            validator.is_some()
        );

        Ok(Self {
            delimiters,
            min_number_length: config.extraction.min_number_length,
            validator,
        })
    }

    /// Set the minimum digit count.
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidArgument`] for zero.
    pub fn with_min_number_length(mut self, min_number_length: usize) -> Result<Self> {
        if min_number_length == 0 {
            return Err(ExtractError::InvalidArgument(
                "min_number_length must be at least 1".to_string(),
            ));
        }
        self.min_number_length = min_number_length;
        Ok(self)
    }

    /// Replace the delimiter table.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Replace the URL validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl UrlValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Skip URL exclusion entirely.
    #[must_use]
    pub fn without_url_filter(mut self) -> Self {
        self.validator = None;
        self
    }

    /// Current minimum digit count.
    #[must_use]
    pub fn min_number_length(&self) -> usize {
        self.min_number_length
    }

    /// Delimiter table in use.
    #[must_use]
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Extract every number in `text`, in order of first appearance.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<ExtractedNumber> {
        run_pipeline(
            text,
            self.min_number_length,
            &self.delimiters,
            self.validator.as_deref(),
        )
    }
}

fn run_pipeline(
    text: &str,
    min_number_length: usize,
    delimiters: &DelimiterSet,
    validator: Option<&dyn UrlValidator>,
) -> Vec<ExtractedNumber> {
    if text.is_empty() || min_number_length == 0 {
        return Vec::new();
    }

    let mut blocks = scan_blocks(text, delimiters);
    let scanned = blocks.len();
    if let Some(validator) = validator {
        blocks = exclude_urls(text, blocks, validator);
    }

    let mut seen = HashSet::new();
    let raw_numbers: Vec<&str> = blocks
        .iter()
        .filter_map(|block| block.slice(text))
        .filter(|raw| seen.insert(*raw))
        .collect();
    let unique = raw_numbers.len();

    let numbers: Vec<ExtractedNumber> = raw_numbers
        .into_iter()
        .filter(|raw| delimiters.clean(raw).chars().count() >= min_number_length)
        .map(|raw| format_number(text, raw, delimiters))
        .collect();

    tracing::debug!(
        "Extracted {} numbers ({} blocks scanned, {} after URL exclusion, {} unique)",
        numbers.len(),
        scanned,
        blocks.len(),
        unique
    );
    numbers
}
