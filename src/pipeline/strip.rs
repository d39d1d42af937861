//! Slide-separator stripper.
//!
//! Quarto starts a new slide at every heading, so xaringan's `---`
//! separators and the per-slide `class:` annotations that follow them are
//! dropped. The leading metadata block is copied through untouched because
//! its delimiters look exactly like separators.

use super::header::DELIMITER;

const CLASS_KEY: &str = "class:";

/// Drop `---` separator lines and `class:` annotations outside the header.
pub fn strip_slide_separators(lines: &[String]) -> Vec<String> {
    let header_len = leading_block_len(lines);
    let mut out = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..header_len]);

    out.extend(
        lines[header_len..]
            .iter()
            .filter(|l| {
                let trimmed = l.trim();
                trimmed != DELIMITER && !trimmed.starts_with(CLASS_KEY)
            })
            .cloned(),
    );
    out
}

/// Number of lines in the leading `---` block, delimiters included.
///
/// An unclosed block swallows the whole document.
fn leading_block_len(lines: &[String]) -> usize {
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return 0;
    }
    lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map_or(lines.len(), |p| p + 2)
}
