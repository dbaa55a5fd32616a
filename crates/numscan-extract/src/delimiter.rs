//! Character classification for number blocks.
//!
//! Delimiters live in an explicit table mapping each character to its role,
//! so adding a separator never touches the scanner's control flow.

use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The international prefix sign. Stripped during normalization, reattached by look-back.
pub const PLUS: char = '+';

/// What a delimiter does inside a number block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterRole {
    /// Separator allowed anywhere inside a block, e.g. `-`
    Single,
    /// Opens a block and must later be matched by `close`
    PairOpen {
        /// The matching closing character
        close: char,
    },
    /// Continues a block only while `open` is the innermost open pair
    PairClose {
        /// The matching opening character
        open: char,
    },
}

impl fmt::Display for DelimiterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single delimiter"),
            Self::PairOpen { close } => write!(f, "pair open (closed by {close:?})"),
            Self::PairClose { open } => write!(f, "pair close (opened by {open:?})"),
        }
    }
}

const STANDARD_DELIMITERS: &[(char, DelimiterRole)] = &[
    (' ', DelimiterRole::Single),
    ('-', DelimiterRole::Single),
    ('.', DelimiterRole::Single),
    ('(', DelimiterRole::PairOpen { close: ')' }),
    (')', DelimiterRole::PairClose { open: '(' }),
];

static STANDARD: Lazy<DelimiterSet> = Lazy::new(|| {
    DelimiterSet::from_entries(STANDARD_DELIMITERS.to_vec())
        .expect("standard delimiter table is valid")
});

/// True iff `c` is a base-10 digit.
#[must_use]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// True iff `c` is the `+` prefix sign.
#[must_use]
pub fn is_plus(c: char) -> bool {
    c == PLUS
}

/// Escape a character so it matches itself inside a regex, including inside a class.
#[must_use]
pub fn escape_for_literal_match(c: char) -> String {
    match c {
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        | '#' | '&' | '-' | '~' => format!("\\{c}"),
        _ => c.to_string(),
    }
}

/// Table of delimiter characters and their roles.
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    entries: Vec<(char, DelimiterRole)>,
    strip: Regex,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl DelimiterSet {
    /// Space, `-` and `.` as single delimiters plus the `(` / `)` pair.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Shared instance of [`DelimiterSet::standard`].
    #[must_use]
    pub fn standard_ref() -> &'static Self {
        &STANDARD
    }

    fn from_entries(entries: Vec<(char, DelimiterRole)>) -> Result<Self> {
        let strip = Self::build_strip_pattern(&entries)?;
        Ok(Self { entries, strip })
    }

    fn build_strip_pattern(entries: &[(char, DelimiterRole)]) -> Result<Regex> {
        let class: String = entries
            .iter()
            .map(|(c, _)| *c)
            .chain(std::iter::once(PLUS))
            .map(escape_for_literal_match)
            .collect();
        Ok(Regex::new(&format!("[{class}]"))?)
    }

    /// Register an additional single delimiter.
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidDelimiter`] if `c` is a digit, `+`,
    /// non-space whitespace, or already registered.
    pub fn with_single(self, c: char) -> Result<Self> {
        self.check_available(c)?;
        let mut entries = self.entries;
        entries.push((c, DelimiterRole::Single));
        Self::from_entries(entries)
    }

    /// Register an additional bracket pair.
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidDelimiter`] if either character is
    /// unusable or already registered, or if `open == close`.
    pub fn with_pair(self, open: char, close: char) -> Result<Self> {
        if open == close {
            return Err(ExtractError::InvalidDelimiter {
                delimiter: open,
                reason: "a pair needs distinct open and close characters".to_string(),
            });
        }
        self.check_available(open)?;
        self.check_available(close)?;

        let mut entries = self.entries;
        entries.push((open, DelimiterRole::PairOpen { close }));
        entries.push((close, DelimiterRole::PairClose { open }));
        Self::from_entries(entries)
    }

    fn check_available(&self, c: char) -> Result<()> {
        let reason = if is_digit(c) {
            Some("digits cannot be delimiters".to_string())
        } else if is_plus(c) {
            Some("'+' is reserved for the international prefix".to_string())
        } else if c.is_whitespace() && c != ' ' {
            Some("only the space character may be used as a whitespace delimiter".to_string())
        } else {
            self.role(c).map(|role| format!("already registered as {role}"))
        };

        match reason {
            Some(reason) => Err(ExtractError::InvalidDelimiter {
                delimiter: c,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Role of `c`, if it is a delimiter.
    #[must_use]
    pub fn role(&self, c: char) -> Option<DelimiterRole> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == c)
            .map(|(_, role)| *role)
    }

    /// True iff `c` is a single delimiter.
    #[must_use]
    pub fn is_single(&self, c: char) -> bool {
        self.role(c) == Some(DelimiterRole::Single)
    }

    /// True iff `c` opens a pair.
    #[must_use]
    pub fn is_pair_open(&self, c: char) -> bool {
        matches!(self.role(c), Some(DelimiterRole::PairOpen { .. }))
    }

    /// True iff `c` closes the pair opened by `open_top`.
    #[must_use]
    pub fn is_pair_close(&self, c: char, open_top: Option<char>) -> bool {
        match (self.role(c), open_top) {
            (Some(DelimiterRole::PairClose { open }), Some(top)) => open == top,
            _ => false,
        }
    }

    /// Closing character for an opening one.
    #[must_use]
    pub fn closer_for(&self, open: char) -> Option<char> {
        match self.role(open) {
            Some(DelimiterRole::PairOpen { close }) => Some(close),
            _ => None,
        }
    }

    /// True iff `c` is dropped by [`DelimiterSet::clean`].
    #[must_use]
    pub fn is_strippable(&self, c: char) -> bool {
        is_plus(c) || self.role(c).is_some()
    }

    /// Character class matching every delimiter and `+`.
    #[must_use]
    pub fn strip_pattern(&self) -> &Regex {
        &self.strip
    }

    /// Remove every delimiter and `+` from `raw`, keeping everything else in order.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        self.strip.replace_all(raw, "").into_owned()
    }

    /// Iterate over the table.
    pub fn iter(&self) -> impl Iterator<Item = (char, DelimiterRole)> + '_ {
        self.entries.iter().copied()
    }
}
