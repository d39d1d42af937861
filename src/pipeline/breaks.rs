//! Incremental-reveal markers.
//!
//! xaringan uses a bare `--` line to reveal the rest of a slide. Quarto's
//! equivalent is `. . .`, but authors also wedge `--` between list items
//! just to reveal one bullet at a time; there it is simply dropped so the
//! list stays one list.

use super::lines::{is_blank, is_list_item};

const PAUSE: &str = "--";
const QUARTO_PAUSE: &str = ". . .\n";

/// Rewrite or drop `--` lines depending on their neighbours.
///
/// Neighbours are read from the input, never from already rewritten output.
pub fn normalize_pauses(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.trim() != PAUSE {
            out.push(line.clone());
            continue;
        }
        let prev = i.checked_sub(1).map_or("", |p| lines[p].as_str());
        let next = lines.get(i + 1).map_or("", String::as_str);

        if is_list_item(prev) || is_list_item(next) {
            continue;
        }
        if is_blank(prev) && is_blank(next) {
            out.push(QUARTO_PAUSE.to_string());
        } else {
            out.push(line.clone());
        }
    }
    out
}
