//! Logical block reconstruction.
//!
//! Long messages wrap across physical lines in the export. A physical line
//! that starts with the bracketed timestamp opens a new block; every other
//! non-blank line belongs to the block before it.

use tracing::warn;

use super::patterns::{DIRECTION_MARK, MESSAGE_START};

/// Splits a transcript into logical message blocks.
///
/// Direction marks are removed, physical lines are trimmed and blank lines
/// are skipped. Continuation lines are joined to their block with a single
/// `\n`. Lines appearing before the first header are dropped with a warning.
///
/// # Example
///
/// ```rust
/// use wagroup::parsing::reconstruct_blocks;
///
/// let blocks = reconstruct_blocks(
///     "[01.02.23, 14:05:00] Alice: first line\nsecond line\n[01.02.23, 14:06:00] Bob: hi",
/// );
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0], "[01.02.23, 14:05:00] Alice: first line\nsecond line");
/// ```
pub fn reconstruct_blocks(transcript: &str) -> Vec<String> {
    let cleaned: String = transcript.chars().filter(|&c| c != DIRECTION_MARK).collect();

    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for (index, raw) in cleaned.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if MESSAGE_START.is_match(line) {
            if let Some(block) = current.replace(line.to_string()) {
                blocks.push(block);
            }
        } else if let Some(block) = current.as_mut() {
            block.push('\n');
            block.push_str(line);
        } else {
            warn!(
                line = index + 1,
                content = line,
                "found content without message header"
            );
        }
    }

    blocks.extend(current);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_lines() {
        let blocks = reconstruct_blocks(
            "[01.02.23, 14:05:00] Alice: Hello\n[01.02.23, 14:06:00] Bob: Hi",
        );
        assert_eq!(
            blocks,
            vec![
                "[01.02.23, 14:05:00] Alice: Hello",
                "[01.02.23, 14:06:00] Bob: Hi",
            ]
        );
    }

    #[test]
    fn test_continuation_lines_joined() {
        let blocks = reconstruct_blocks(
            "[01.02.23, 14:05:00] Alice: one\n  two  \nthree\n[01.02.23, 14:06:00] Bob: Hi",
        );
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "[01.02.23, 14:05:00] Alice: one\ntwo\nthree");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let blocks = reconstruct_blocks("[01.02.23, 14:05:00] Alice: one\n\n   \ntwo");
        assert_eq!(blocks, vec!["[01.02.23, 14:05:00] Alice: one\ntwo"]);
    }

    #[test]
    fn test_orphan_preamble_dropped() {
        let blocks = reconstruct_blocks("garbage before\n[01.02.23, 14:05:00] Alice: one");
        assert_eq!(blocks, vec!["[01.02.23, 14:05:00] Alice: one"]);
    }

    #[test]
    fn test_direction_marks_removed() {
        let blocks = reconstruct_blocks("\u{200e}[01.02.23, 14:05:00] Alice: \u{200e}image omitted");
        assert_eq!(blocks, vec!["[01.02.23, 14:05:00] Alice: image omitted"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let blocks = reconstruct_blocks(
            "[01.02.23, 14:05:00] Alice: one\r\ntwo\r\n[01.02.23, 14:06:00] Bob: Hi\r\n",
        );
        assert_eq!(
            blocks,
            vec![
                "[01.02.23, 14:05:00] Alice: one\ntwo",
                "[01.02.23, 14:06:00] Bob: Hi",
            ]
        );
    }

    #[test]
    fn test_last_block_flushed() {
        let blocks = reconstruct_blocks("[01.02.23, 14:05:00] Alice: one\ntail");
        assert_eq!(blocks, vec!["[01.02.23, 14:05:00] Alice: one\ntail"]);
    }

    #[test]
    fn test_no_headers() {
        assert!(reconstruct_blocks("just\nsome\ntext").is_empty());
        assert!(reconstruct_blocks("").is_empty());
    }
}
