//! Exclusion of blocks that sit inside URLs.
//!
//! A block is tested through its enclosing whitespace-delimited token, so the
//! validator sees scheme, host and path instead of a bare digit run.

use numscan_core::NumberBlock;
use url::{Host, Url};

/// Decides whether a token is a URL.
pub trait UrlValidator: Send + Sync {
    /// True iff `candidate` is an absolute URL (or, depending on strictness, a hostname).
    fn is_valid_url(&self, candidate: &str) -> bool;
}

impl<F> UrlValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid_url(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// [`UrlValidator`] backed by the `url` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardUrlValidator {
    allow_bare_hosts: bool,
}

impl Default for StandardUrlValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StandardUrlValidator {
    /// Create a validator. With `allow_bare_hosts`, `www.example.com/123` counts as a URL.
    #[must_use]
    pub const fn new(allow_bare_hosts: bool) -> Self {
        Self { allow_bare_hosts }
    }

    fn is_bare_host(candidate: &str) -> bool {
        let Ok(url) = Url::parse(&format!("http://{candidate}")) else {
            return false;
        };
        let Some(Host::Domain(domain)) = url.host() else {
            return false;
        };

        let domain = domain.trim_end_matches('.');
        let Some((labels, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        // `0254123123.Thanks` is a number ending a sentence, not a host.
        let digits_only = labels
            .split('.')
            .all(|label| label.chars().all(|c| c.is_ascii_digit()));
        !digits_only && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl UrlValidator for StandardUrlValidator {
    fn is_valid_url(&self, candidate: &str) -> bool {
        let candidate = candidate.trim_matches(|c: char| {
            c.is_whitespace()
                || matches!(c, '*' | '(' | ')' | '[' | ']' | '<' | '>' | '"' | '\'' | ',' | ';')
        });
        if candidate.is_empty() {
            return false;
        }

        if let Ok(url) = Url::parse(candidate) {
            if url.has_host() {
                return true;
            }
        }

        self.allow_bare_hosts && Self::is_bare_host(candidate)
    }
}

/// The maximal whitespace-delimited substring of `text` containing `block`.
///
/// Whitespace the block itself carries at either edge is not crossed. Returns
/// an empty string if `block` does not belong to `text`.
#[must_use]
pub fn enclosing_token<'a>(text: &'a str, block: &NumberBlock) -> &'a str {
    let Some(raw) = block.slice(text) else {
        return "";
    };
    let core_start = block.start() + (raw.len() - raw.trim_start().len());
    let core_end = block.start() + raw.trim_end().len();
    if core_start >= core_end {
        return "";
    }

    let start = text[..core_start]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let end = text[core_end..]
        .find(char::is_whitespace)
        .map_or(text.len(), |i| core_end + i);

    &text[start..end]
}

/// Drop every block whose enclosing token the validator accepts as a URL.
#[must_use]
pub fn exclude_urls(
    text: &str,
    blocks: Vec<NumberBlock>,
    validator: &dyn UrlValidator,
) -> Vec<NumberBlock> {
    let before = blocks.len();
    let kept: Vec<NumberBlock> = blocks
        .into_iter()
        .filter(|block| {
            let token = enclosing_token(text, block);
            let is_url = validator.is_valid_url(token);
            if is_url {
                tracing::trace!("Excluding block {} inside URL token {:?}", block, token);
            }
            !is_url
        })
        .collect();

    tracing::debug!("Excluded {} blocks inside URLs", before - kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::DelimiterSet;
    use crate::scanner::scan_blocks;

    fn block_of(text: &str, needle: &str) -> NumberBlock {
        let start = text.find(needle).expect("needle in text");
        NumberBlock::new(start, start + needle.len()).expect("valid block")
    }

    #[test]
    fn test_absolute_urls() {
        let validator = StandardUrlValidator::default();
        assert!(validator.is_valid_url("http://www.stevesautoworld.com.au/123456789"));
        assert!(validator.is_valid_url("https://example.com"));
        assert!(validator.is_valid_url("ftp://files.example.org/pub/2016"));
    }

    #[test]
    fn test_bare_hosts() {
        let strict = StandardUrlValidator::new(false);
        let lenient = StandardUrlValidator::new(true);

        assert!(!strict.is_valid_url("www.example.com/123456"));
        assert!(lenient.is_valid_url("www.example.com/123456"));
        assert!(lenient.is_valid_url("*www.example.com.au/123456"));
    }

    #[test]
    fn test_number_before_missing_space_is_not_a_host() {
        let validator = StandardUrlValidator::default();
        assert!(!validator.is_valid_url("0254123123.Thanks"));
        assert!(!validator.is_valid_url("0254.123123.Call"));
        assert!(validator.is_valid_url("www.163.com/123456"));
        assert!(validator.is_valid_url("shop24.example.com/123456"));
    }

    #[test]
    fn test_prose_and_numbers_are_not_urls() {
        let validator = StandardUrlValidator::default();
        for token in [
            "",
            "text",
            "123456789",
            "0254",
            "+420",
            "5:30",
            "24/7",
            "9am-",
            "78,238",
            "(123)",
            "192.168.1.1",
            "tel:0254123123",
            "Website:",
        ] {
            assert!(!validator.is_valid_url(token), "{token:?} is not a URL");
        }
    }

    #[test]
    fn test_enclosing_token() {
        let text = "click *Website: http://www.site.com.au/123456789 *Find";
        let block = block_of(text, "123456789");
        assert_eq!(
            enclosing_token(text, &block),
            "http://www.site.com.au/123456789"
        );
    }

    #[test]
    fn test_enclosing_token_at_text_edges() {
        let text = "123456789";
        let block = block_of(text, "123456789");
        assert_eq!(enclosing_token(text, &block), "123456789");
    }

    #[test]
    fn test_enclosing_token_ignores_block_edge_whitespace() {
        let text = "call 0254 123 123 today";
        let block = block_of(text, "0254 123 123 ");
        assert_eq!(enclosing_token(text, &block), "0254 123 123");
    }

    #[test]
    fn test_enclosing_token_crosses_comma() {
        let text = "see http://a.com/x,0254123123 now";
        let block = block_of(text, "0254123123");
        assert_eq!(enclosing_token(text, &block), "http://a.com/x,0254123123");
    }

    #[test]
    fn test_exclude_urls() {
        let text = "Call 0254123123 or see http://www.site.com/987654321 today";
        let blocks = scan_blocks(text, &DelimiterSet::standard());
        assert_eq!(blocks.len(), 2);

        let kept = exclude_urls(text, blocks, &StandardUrlValidator::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slice(text), Some("0254123123 "));
    }

    #[test]
    fn test_closure_validator() {
        let text = "id 123456 and 654321";
        let blocks = scan_blocks(text, &DelimiterSet::standard());
        let never = |_: &str| false;
        let always = |_: &str| true;

        assert_eq!(exclude_urls(text, blocks.clone(), &never).len(), 2);
        assert!(exclude_urls(text, blocks, &always).is_empty());
    }
}
