//! Fixed-pattern line filters.
//!
//! Two per-line passes driven by [`ConversionConfig`](crate::ConversionConfig):
//! one deletes lines (xaringan-only helpers such as `xaringanExtra::`), the
//! other comments out R code that should not run when Quarto renders the
//! deck (test runners and the like).

use regex::Regex;

const COMMENT_PREFIX: &str = "# ";

/// Drop every line matched by one of `patterns`.
pub fn remove_matching(lines: &[String], patterns: &[Regex]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !patterns.iter().any(|p| p.is_match(l)))
        .cloned()
        .collect()
}

/// Prefix lines matched by one of `patterns` with `# `, unless already commented.
pub fn comment_matching(lines: &[String], patterns: &[Regex]) -> Vec<String> {
    lines
        .iter()
        .map(|l| {
            if patterns.iter().any(|p| p.is_match(l)) && !l.trim_start().starts_with('#') {
                format!("{COMMENT_PREFIX}{l}")
            } else {
                l.clone()
            }
        })
        .collect()
}
