//! Header normaliser: reduce the YAML front matter to its `title:` field.
//!
//! xaringan decks carry `output:`, `author:`, `date:` and a pile of
//! `nature:` options that mean nothing to Quarto. Only the title survives.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

pub(crate) const DELIMITER: &str = "---";

static RE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*title\s*:\s*(.*)").unwrap());

/// Keep only the title in the leading metadata block.
///
/// `title_override` replaces the extracted title, and is written even when
/// the block had none. Documents that do not open with `---`, or whose block
/// is never closed, pass through unchanged.
pub fn normalize_header(lines: &[String], title_override: Option<&str>) -> Vec<String> {
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return lines.to_vec();
    }
    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map(|p| p + 1)
    else {
        warn!("Metadata block is never closed; leaving it untouched");
        return lines.to_vec();
    };

    let found = lines[1..close]
        .iter()
        .find_map(|l| RE_TITLE.captures(l).map(|c| c[1].trim().to_string()));
    let title = title_override.map(str::to_string).or(found);
    debug!("Header title: {:?}", title);

    let mut out = Vec::with_capacity(lines.len() - close + 2);
    out.push(format!("{DELIMITER}\n"));
    if let Some(t) = title.filter(|t| !t.is_empty()) {
        out.push(format!("title: {t}\n"));
    }
    out.push(format!("{DELIMITER}\n"));
    out.extend_from_slice(&lines[close + 1..]);
    out
}
