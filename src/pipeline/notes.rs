//! Speaker notes: `???` blocks become fenced `::: {.notes}` divs.
//!
//! In xaringan everything after `???` up to the next slide separator is
//! presenter-only. The separator itself is left in place; the stripper
//! stage removes it later.

use tracing::warn;

const NOTES_MARKER: &str = "???";

/// Rewrite every `???` notes block into a fenced notes div.
pub fn convert_notes(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 4);
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim() != NOTES_MARKER {
            out.push(lines[i].clone());
            i += 1;
            continue;
        }

        out.push("::: {.notes}\n".to_string());
        i += 1;
        while i < lines.len() && !lines[i].trim().starts_with("---") {
            out.push(lines[i].clone());
            i += 1;
        }
        if i == lines.len() {
            warn!("Notes block runs to end of document");
        }
        out.push(":::\n".to_string());
        out.push("\n".to_string());
    }

    out
}
