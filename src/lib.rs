//! # xaringan2qmd
//!
//! Convert R Markdown slide decks written for xaringan into Quarto
//! (revealjs) markdown.
//!
//! The conversion is a fixed chain of line-rewriting passes. There is no
//! markdown parser: every xaringan construct this crate cares about is
//! anchored to whole lines (`---`, `--`, `???`, `.pull-left[`, `]`, chunk
//! fences), so each pass is a small scan over a `Vec<String>`.
//!
//! ## Pipeline Overview
//!
//! ```text
//! .Rmd
//!  │
//!  ├─ 1. Header     keep only `title:` in the YAML block
//!  ├─ 2. Notes      `???` → `::: {.notes}`
//!  ├─ 3. Strip      drop `---` separators and `class:` lines
//!  ├─ 4. Patterns   remove / comment out configured lines
//!  ├─ 5. Pauses     `--` → `. . .` or dropped between bullets
//!  ├─ 6. Lists      remove lone blank lines between bullets
//!  ├─ 7. Columns    `.pull-left[`/`.pull-right[` → `:::: {.columns}`
//!  ├─ 8. Images     `include_graphics` chunks → `![](path){width=..}`
//!  ├─ 9. Setup      drop `opts_chunk$set(...)` and the pdfcrop hook
//!  ├─ 10. Paths     `here::here()` in R code, `../` in image links
//!  └─ 11. Footnotes `.footnote[...]` → `^[...]`
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use xaringan2qmd::{convert_str, ConversionConfig};
//!
//! let rmd = "---\ntitle: Demo\noutput: xaringan::moon_reader\n---\n\n- one\n--\n- two\n";
//! let out = convert_str(rmd, &ConversionConfig::default());
//! assert_eq!(out.qmd, "---\ntitle: Demo\n---\n\n- one\n- two\n");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `rmd2qmd` binary (clap + anyhow + serde_json + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert_file, convert_str};
pub use error::Rmd2QmdError;
pub use output::{ConversionOutput, ConversionStats, StageReport};
pub use pipeline::Stage;
