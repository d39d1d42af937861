//! Conversion entry points.
//!
//! [`convert_str`] is the pure core: text in, text out. [`convert_file`]
//! wraps it with the two pieces of I/O the tool needs, reading the whole
//! input up front and writing the whole output at the end.

use crate::config::ConversionConfig;
use crate::error::Rmd2QmdError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{self, lines::split_lines};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert xaringan R Markdown text to Quarto markdown.
///
/// Never fails: malformed input yields best-effort output.
///
/// # Example
/// ```rust
/// use xaringan2qmd::{convert_str, ConversionConfig};
///
/// let out = convert_str(".footnote[Hello]\n", &ConversionConfig::default());
/// assert_eq!(out.qmd, "^[Hello]\n");
/// ```
pub fn convert_str(input: &str, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();
    let lines = split_lines(input);
    let input_lines = lines.len();

    let (lines, stages) = pipeline::run(lines, config);

    let stats = ConversionStats {
        input_lines,
        output_lines: lines.len(),
        stages,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    ConversionOutput {
        qmd: lines.concat(),
        stats,
    }
}

/// Convert `input_path` and write the result to `output_path`.
///
/// An existing output file is replaced. The write is atomic (temp file in
/// the target directory, then rename) so a failure never leaves a truncated
/// `.qmd` behind. Missing parent directories are created.
pub fn convert_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Rmd2QmdError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    info!("Converting {} -> {}", input_path.display(), output_path.display());

    let text = read_input(input_path)?;
    let output = convert_str(&text, config);
    write_output(output_path, &output.qmd)?;

    info!(
        "Conversion complete: {} -> {} lines, {} stages changed, {}ms",
        output.stats.input_lines,
        output.stats.output_lines,
        output.stats.changed_stages().count(),
        output.stats.duration_ms
    );
    Ok(output.stats)
}

fn read_input(path: &Path) -> Result<String, Rmd2QmdError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Rmd2QmdError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Rmd2QmdError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Rmd2QmdError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    // Decks are "UTF-8-ish"; stray bytes should not abort the conversion.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(path: &Path, contents: &str) -> Result<(), Rmd2QmdError> {
    let write_err = |source| Rmd2QmdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_str_counts_lines() {
        let out = convert_str("---\ntitle: T\nauthor: A\n---\nbody\n", &ConversionConfig::default());
        assert_eq!(out.qmd, "---\ntitle: T\n---\nbody\n");
        assert_eq!(out.stats.input_lines, 5);
        assert_eq!(out.stats.output_lines, 4);
    }

    #[test]
    fn test_convert_str_normalises_line_endings() {
        let out = convert_str("a\r\nb", &ConversionConfig::default());
        assert_eq!(out.qmd, "a\nb\n");
    }

    #[test]
    fn test_missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.Rmd");
        let err = convert_file(&missing, dir.path().join("out.qmd"), &ConversionConfig::default())
            .unwrap_err();
        assert!(matches!(err, Rmd2QmdError::FileNotFound { ref path } if path == &missing));
        assert!(!dir.path().join("out.qmd").exists());
    }

    #[test]
    fn test_write_creates_parent_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.Rmd");
        let output = dir.path().join("quarto/slides/deck.qmd");
        std::fs::write(&input, ".footnote[x]\n").unwrap();

        convert_file(&input, &output, &ConversionConfig::default()).unwrap();
        std::fs::write(&input, ".footnote[y]\n").unwrap();
        convert_file(&input, &output, &ConversionConfig::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "^[y]\n");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.Rmd");
        let output = dir.path().join("deck.qmd");
        std::fs::write(&input, b"caf\xe9\n").unwrap();

        convert_file(&input, &output, &ConversionConfig::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "caf\u{FFFD}\n");
    }
}
