//! Rewriting stages for xaringan-to-Quarto conversion.
//!
//! Each submodule implements one self-contained pass over the document's
//! lines. Stages share no state; each takes the previous stage's lines and
//! returns new ones, which keeps every rule testable on its own.
//!
//! ## Data Flow
//!
//! ```text
//! header ──▶ notes ──▶ strip ──▶ remove/comment ──▶ pauses ──▶ lists
//!    ──▶ columns ──▶ image chunks ──▶ setup ──▶ code paths ──▶ image links
//!    ──▶ footnotes
//! ```
//!
//! The order matters. Notes are converted before separators are stripped,
//! since the separator is what ends a notes block. Pauses are resolved
//! before columns because a pause between two column blocks must not split
//! the pair. Image chunks are turned into markdown links before the link
//! fixer adds `../`, and the `file.path()` inside such a chunk is consumed
//! before the code-path pass could wrap it in `here::here()`.

pub mod breaks;
pub mod columns;
pub mod footnotes;
pub mod header;
pub mod images;
pub mod lines;
pub mod lists;
pub mod notes;
pub mod paths;
pub mod patterns;
pub mod setup;
pub mod strip;

use crate::config::ConversionConfig;
use crate::output::StageReport;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One rewriting pass, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Header,
    Notes,
    StripSeparators,
    RemovePatterns,
    CommentPatterns,
    Pauses,
    CompactLists,
    Columns,
    ImageChunks,
    SetupChunks,
    CodePaths,
    ImageLinks,
    Footnotes,
}

impl Stage {
    /// Every stage, in the order [`run`] applies them.
    pub const ALL: [Stage; 13] = [
        Stage::Header,
        Stage::Notes,
        Stage::StripSeparators,
        Stage::RemovePatterns,
        Stage::CommentPatterns,
        Stage::Pauses,
        Stage::CompactLists,
        Stage::Columns,
        Stage::ImageChunks,
        Stage::SetupChunks,
        Stage::CodePaths,
        Stage::ImageLinks,
        Stage::Footnotes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Header => "header",
            Stage::Notes => "notes",
            Stage::StripSeparators => "strip-separators",
            Stage::RemovePatterns => "remove-patterns",
            Stage::CommentPatterns => "comment-patterns",
            Stage::Pauses => "pauses",
            Stage::CompactLists => "compact-lists",
            Stage::Columns => "columns",
            Stage::ImageChunks => "image-chunks",
            Stage::SetupChunks => "setup-chunks",
            Stage::CodePaths => "code-paths",
            Stage::ImageLinks => "image-links",
            Stage::Footnotes => "footnotes",
        }
    }

    /// Apply this stage alone.
    pub fn apply(self, lines: &[String], config: &ConversionConfig) -> Vec<String> {
        match self {
            Stage::Header => header::normalize_header(lines, config.title.as_deref()),
            Stage::Notes => notes::convert_notes(lines),
            Stage::StripSeparators => strip::strip_slide_separators(lines),
            Stage::RemovePatterns => patterns::remove_matching(lines, &config.remove_patterns),
            Stage::CommentPatterns => patterns::comment_matching(lines, &config.comment_patterns),
            Stage::Pauses => breaks::normalize_pauses(lines),
            Stage::CompactLists => lists::compact_lists(lines),
            Stage::Columns => columns::convert_columns(lines),
            Stage::ImageChunks => images::convert_image_chunks(lines),
            Stage::SetupChunks => setup::remove_setup_calls(lines),
            Stage::CodePaths => paths::rewrite_code_paths(lines),
            Stage::ImageLinks => paths::fix_image_links(lines),
            Stage::Footnotes => footnotes::convert_footnotes(lines),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run every stage over `lines`, in order.
///
/// Lines are expected to end in `\n`, as produced by [`lines::split_lines`].
/// Returns the rewritten lines and one report per stage.
pub fn run(lines: Vec<String>, config: &ConversionConfig) -> (Vec<String>, Vec<StageReport>) {
    let mut reports = Vec::with_capacity(Stage::ALL.len());
    let mut current = lines;

    for stage in Stage::ALL {
        let next = stage.apply(&current, config);
        let report = StageReport {
            stage,
            lines_in: current.len(),
            lines_out: next.len(),
            changed: next != current,
        };
        debug!(
            "Stage {:<16} {:>5} -> {:>5} lines{}",
            stage.as_str(),
            report.lines_in,
            report.lines_out,
            if report.changed { "" } else { " (unchanged)" }
        );
        reports.push(report);
        current = next;
    }

    (current, reports)
}
