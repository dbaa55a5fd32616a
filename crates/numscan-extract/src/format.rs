//! Display and normalized renderings of a raw number.

use crate::delimiter::{is_plus, DelimiterSet};
use numscan_core::ExtractedNumber;

/// Strip every standard delimiter and `+` from `raw`.
///
/// Idempotent; characters that are not delimiters are kept in order.
#[must_use]
pub fn clean_number(raw: &str) -> String {
    DelimiterSet::standard_ref().clean(raw)
}

/// Human-readable form of `raw` as it appeared in `text`.
///
/// Surrounding whitespace and one trailing single delimiter (e.g. a sentence
/// period) are dropped. A `+` right before the first occurrence of the result
/// in `text` is reattached, as is a pair-open character when the result
/// contains its matching close.
#[must_use]
pub fn original_format(text: &str, raw: &str, delimiters: &DelimiterSet) -> String {
    let trimmed = raw.trim();
    let cleaned = match trimmed.chars().next_back() {
        Some(last) if delimiters.is_single(last) => {
            trimmed[..trimmed.len() - last.len_utf8()].trim_end()
        }
        _ => trimmed,
    };
    if cleaned.is_empty() {
        return String::new();
    }

    let preceding = text
        .find(cleaned)
        .and_then(|index| text[..index].chars().next_back());

    match preceding {
        Some(open)
            if delimiters
                .closer_for(open)
                .is_some_and(|close| cleaned.contains(close)) =>
        {
            format!("{open}{cleaned}")
        }
        Some(c) if is_plus(c) => format!("{c}{cleaned}"),
        _ => cleaned.to_string(),
    }
}

/// Build the output record for one raw number.
#[must_use]
pub fn format_number(text: &str, raw: &str, delimiters: &DelimiterSet) -> ExtractedNumber {
    ExtractedNumber::new(original_format(text, raw, delimiters), delimiters.clean(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original(text: &str, raw: &str) -> String {
        original_format(text, raw, DelimiterSet::standard_ref())
    }

    #[test]
    fn test_clean_number() {
        assert_eq!(clean_number("+420 123 456 789"), "420123456789");
        assert_eq!(clean_number("(420) 123-456-789"), "420123456789");
        assert_eq!(clean_number(""), "");
        assert_eq!(clean_number("(- .)"), "");
    }

    #[test]
    fn test_clean_number_idempotent() {
        let once = clean_number("+1 (415) 555.1212");
        assert_eq!(clean_number(&once), once);
    }

    #[test]
    fn test_original_format_trims() {
        let text = "This is a 123456789 text";
        assert_eq!(original(text, "123456789 "), "123456789");
    }

    #[test]
    fn test_original_format_drops_trailing_delimiter() {
        let text = "Call 0254 123 123. Thanks";
        assert_eq!(original(text, "0254 123 123. "), "0254 123 123");

        let text = "Call 0254-123-123- ok";
        assert_eq!(original(text, "0254-123-123- "), "0254-123-123");
    }

    #[test]
    fn test_original_format_reattaches_plus() {
        let text = "On +420 254 123 123 + click";
        assert_eq!(original(text, "420 254 123 123 "), "+420 254 123 123");
    }

    #[test]
    fn test_original_format_keeps_parenthesis_block() {
        let text = "This is a (123) 456-789-123 text.";
        assert_eq!(original(text, "(123) 456-789-123 "), "(123) 456-789-123");
    }

    #[test]
    fn test_original_format_reattaches_parenthesis() {
        let text = "call (123) 456-789";
        assert_eq!(original(text, "123) 456-789"), "(123) 456-789");
        // Without a closing parenthesis the opener is not reattached
        let text = "call (123456789";
        assert_eq!(original(text, "123456789"), "123456789");
    }

    #[test]
    fn test_original_format_uses_first_occurrence() {
        let text = "+12345 and 12345";
        assert_eq!(original(text, "12345"), "+12345");
    }

    #[test]
    fn test_format_number() {
        let text = "On +420 254 123 123 + click";
        let record = format_number(text, "420 254 123 123 ", DelimiterSet::standard_ref());
        assert_eq!(record.original_format, "+420 254 123 123");
        assert_eq!(record.filtered_format, "420254123123");
    }
}
