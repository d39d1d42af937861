//! Line-level helpers shared by the rewriting stages.
//!
//! A document is a `Vec<String>` holding one physical line per element,
//! each ending in `\n`.
//! Stages compare on the trimmed text but always emit the original line,
//! so untouched lines survive byte-for-byte.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Split text into lines, keeping terminators. CRLF and lone CR become LF,
/// and an unterminated last line gets a `\n` so stages can append freely.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split_inclusive('\n')
        .map(|l| {
            if l.ends_with('\n') {
                l.to_string()
            } else {
                format!("{l}\n")
            }
        })
        .collect()
}

/// Split a rendered multi-line fragment into document lines.
pub fn push_fragment(out: &mut Vec<String>, fragment: &str) {
    out.extend(fragment.split_inclusive('\n').map(str::to_string));
}

/// True for `- item`, `* item` and `1. item`, ignoring indentation.
pub fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("- ") || trimmed.starts_with("* ") || RE_ORDERED_ITEM.is_match(trimmed)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A run of lines gathered by [`collect_until`].
#[derive(Debug, Default, PartialEq)]
pub struct Collected {
    /// Lines before the terminator, verbatim.
    pub lines: Vec<String>,
    /// Index of the first line after the terminator (or `lines.len()`).
    pub next: usize,
    /// Whether a terminator was found before end-of-document.
    pub terminated: bool,
}

/// Collect lines from `start` until one satisfies `is_end`.
///
/// The terminating line itself is consumed but not returned. Without a
/// terminator everything to end-of-document is collected.
pub fn collect_until(lines: &[String], start: usize, is_end: impl Fn(&str) -> bool) -> Collected {
    let mut i = start;
    while i < lines.len() && !is_end(&lines[i]) {
        i += 1;
    }
    let body = lines.get(start..i).unwrap_or_default().to_vec();
    if i < lines.len() {
        Collected {
            lines: body,
            next: i + 1,
            terminated: true,
        }
    } else {
        Collected {
            lines: body,
            next: lines.len(),
            terminated: false,
        }
    }
}

#[cfg(test)]
pub(crate) fn doc(text: &str) -> Vec<String> {
    split_lines(text)
}
