//! List compaction.
//!
//! Once the `--` reveals between bullets are gone, the list is often left
//! "loose" with a single blank line between items. Quarto would render that
//! as separate paragraphs, so the lone blank is removed.

use super::lines::{is_blank, is_list_item};

/// Remove a single blank line sitting between two list items.
///
/// Runs of two or more blank lines are left alone.
pub fn compact_lists(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        out.push(lines[i].clone());
        if is_list_item(&lines[i])
            && lines.get(i + 1).is_some_and(|l| is_blank(l))
            && lines.get(i + 2).is_some_and(|l| is_list_item(l))
        {
            i += 1;
        }
        i += 1;
    }
    out
}
