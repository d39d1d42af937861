//! Error types for the xaringan2qmd library.
//!
//! Only two things can go wrong: the files on either side of the pipeline
//! (missing input, unwritable output) and the caller-supplied configuration
//! (a pattern that is not a valid regex). The rewriting stages themselves are
//! total over any line sequence, so there is no per-stage error type;
//! malformed slide markup produces best-effort output instead of an `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the xaringan2qmd library.
#[derive(Debug, Error)]
pub enum Rmd2QmdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as text.
    #[error("Failed to read input file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output Quarto file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// A removal or comment pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
