//! Single-pass scanner producing candidate number blocks.

use crate::delimiter::{is_digit, DelimiterSet};
use numscan_core::NumberBlock;

/// Scan `text` left to right and return every candidate block in order.
///
/// A block opens on a digit or a pair-open delimiter and continues while
/// characters are digits, single delimiters, or the close matching the
/// innermost open pair. The character that ends a block may itself open the
/// next one. Blocks made only of delimiters are possible; they normalize to
/// an empty string and fall to the length threshold later.
#[must_use]
pub fn scan_blocks(text: &str, delimiters: &DelimiterSet) -> Vec<NumberBlock> {
    let mut blocks = Vec::new();
    let mut block_start: Option<usize> = None;
    let mut open_pairs: Vec<char> = Vec::new();

    for (i, c) in text.char_indices() {
        if let Some(start) = block_start {
            if continues_block(c, delimiters, &mut open_pairs) {
                continue;
            }
            push_block(&mut blocks, start, i);
            block_start = None;
            open_pairs.clear();
        }

        if is_digit(c) {
            block_start = Some(i);
        } else if delimiters.is_pair_open(c) {
            block_start = Some(i);
            open_pairs.push(c);
        }
    }

    if let Some(start) = block_start {
        push_block(&mut blocks, start, text.len());
    }

    tracing::trace!("Scanned {} candidate blocks", blocks.len());
    blocks
}

fn continues_block(c: char, delimiters: &DelimiterSet, open_pairs: &mut Vec<char>) -> bool {
    if is_digit(c) || delimiters.is_single(c) {
        return true;
    }
    if delimiters.is_pair_close(c, open_pairs.last().copied()) {
        open_pairs.pop();
        return true;
    }
    false
}

fn push_block(blocks: &mut Vec<NumberBlock>, start: usize, end: usize) {
    // start < end always holds: the opening character is part of the block
    if let Ok(block) = NumberBlock::new(start, end) {
        blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_blocks(text: &str) -> Vec<&str> {
        scan_blocks(text, &DelimiterSet::standard())
            .iter()
            .filter_map(|block| block.slice(text))
            .collect()
    }

    #[test]
    fn test_plain_digit_runs() {
        assert_eq!(
            raw_blocks("This is a 123456789 text with number 0254 123 123 that"),
            vec!["123456789 ", "0254 123 123 "]
        );
    }

    #[test]
    fn test_block_at_end_of_text() {
        let text = "call 0254-123-123";
        let blocks = scan_blocks(text, &DelimiterSet::standard());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start(), 5);
        assert_eq!(blocks[0].end(), text.len());
    }

    #[test]
    fn test_parenthesis_opens_block() {
        assert_eq!(
            raw_blocks("This is a (123) 456-789-123 text."),
            vec!["(123) 456-789-123 "]
        );
    }

    #[test]
    fn test_unmatched_close_ends_block() {
        assert_eq!(raw_blocks("see 123) next"), vec!["123"]);
    }

    #[test]
    fn test_plus_is_not_part_of_block() {
        assert_eq!(
            raw_blocks("On +420 254 123 123 + click"),
            vec!["420 254 123 123 "]
        );
    }

    #[test]
    fn test_closing_character_can_open_next_block() {
        assert_eq!(raw_blocks("0254 (123) 456"), vec!["0254 ", "(123) 456"]);
    }

    #[test]
    fn test_delimiter_only_block() {
        assert_eq!(raw_blocks("Radio (Oricom)"), vec!["("]);
    }

    #[test]
    fn test_no_digits() {
        assert!(raw_blocks("string without number").is_empty());
        assert!(raw_blocks("").is_empty());
    }

    #[test]
    fn test_newline_ends_block() {
        assert_eq!(
            raw_blocks("\n  800123456\n  800123457\n"),
            vec!["800123456", "800123457"]
        );
    }

    #[test]
    fn test_multibyte_text_offsets() {
        let text = "Téléphone: 0254 123 123, merci";
        assert_eq!(raw_blocks(text), vec!["0254 123 123"]);
    }

    #[test]
    fn test_custom_pair() {
        let set = DelimiterSet::standard()
            .with_pair('[', ']')
            .expect("valid pair");
        let text = "ring [0254] 123 123 now";
        let raws: Vec<&str> = scan_blocks(text, &set)
            .iter()
            .filter_map(|block| block.slice(text))
            .collect();
        assert_eq!(raws, vec!["[0254] 123 123 "]);
    }
}
