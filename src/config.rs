//! Configuration types for xaringan-to-Quarto conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The stage order itself is fixed; the
//! config only carries the data the stages are parameterised over: the
//! replacement title and the two line-pattern lists.
//!
//! Patterns are compiled once in [`ConversionConfigBuilder::build`], so a bad
//! regex is reported before any file is touched and the stages never
//! recompile anything.

use crate::error::Rmd2QmdError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines starting with one of these are dropped outright.
pub const DEFAULT_REMOVE_PATTERNS: &[&str] = &[r"xaringanExtra::"];

/// Lines containing one of these are commented out with `# `.
pub const DEFAULT_COMMENT_PATTERNS: &[&str] = &[r#"testthat::test_dir\("tests"\)"#];

static DEFAULT_REMOVE: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFAULT_REMOVE_PATTERNS
        .iter()
        .map(|p| Regex::new(&anchor(p)).unwrap())
        .collect()
});

static DEFAULT_COMMENT: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFAULT_COMMENT_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Removal patterns only ever match at the start of a line.
fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})")
}

/// Configuration for a single xaringan-to-Quarto conversion.
///
/// # Example
/// ```rust
/// use xaringan2qmd::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .title("Intro to R")
///     .remove_pattern(r"library\(xaringanthemer\)")
///     .build()
///     .unwrap();
/// assert_eq!(config.title.as_deref(), Some("Intro to R"));
/// ```
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Replacement for the `title:` field of the leading metadata block.
    ///
    /// When set it wins over the title found in the source, and is written
    /// even when the source block had no title at all.
    pub title: Option<String>,

    /// Lines matching any of these (anchored at line start) are deleted.
    pub remove_patterns: Vec<Regex>,

    /// Lines matching any of these (anywhere) are prefixed with `# `.
    pub comment_patterns: Vec<Regex>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            title: None,
            remove_patterns: DEFAULT_REMOVE.clone(),
            comment_patterns: DEFAULT_COMMENT.clone(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            title: None,
            remove_patterns: Vec::new(),
            comment_patterns: Vec::new(),
            use_defaults: true,
        }
    }
}

/// Builder for [`ConversionConfig`].
///
/// Holds user patterns as source text until [`build`](Self::build) compiles
/// them after the built-in ones.
#[derive(Debug, Clone)]
pub struct ConversionConfigBuilder {
    title: Option<String>,
    remove_patterns: Vec<String>,
    comment_patterns: Vec<String>,
    use_defaults: bool,
}

impl ConversionConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a line-removal regex. It is anchored at line start.
    pub fn remove_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.remove_patterns.push(pattern.into());
        self
    }

    /// Append a comment-out regex, matched anywhere in the line.
    pub fn comment_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.comment_patterns.push(pattern.into());
        self
    }

    /// Drop the built-in pattern lists; only explicitly added ones remain.
    pub fn clear_default_patterns(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Build the configuration, validating the title and compiling patterns.
    pub fn build(self) -> Result<ConversionConfig, Rmd2QmdError> {
        let title = match self.title {
            Some(t) if t.trim().is_empty() => {
                return Err(Rmd2QmdError::InvalidConfig(
                    "title override must not be empty".into(),
                ));
            }
            Some(t) if t.contains('\n') => {
                return Err(Rmd2QmdError::InvalidConfig(format!(
                    "title override must be a single line, got {t:?}"
                )));
            }
            Some(t) => Some(t.trim().to_string()),
            None => None,
        };

        let (mut remove_patterns, mut comment_patterns) = if self.use_defaults {
            (DEFAULT_REMOVE.clone(), DEFAULT_COMMENT.clone())
        } else {
            (Vec::new(), Vec::new())
        };
        for p in &self.remove_patterns {
            remove_patterns.push(compile(p, &anchor(p))?);
        }
        for p in &self.comment_patterns {
            comment_patterns.push(compile(p, p)?);
        }

        Ok(ConversionConfig {
            title,
            remove_patterns,
            comment_patterns,
        })
    }
}

fn compile(source: &str, expr: &str) -> Result<Regex, Rmd2QmdError> {
    Regex::new(expr).map_err(|e| Rmd2QmdError::InvalidPattern {
        pattern: source.to_string(),
        source: e,
    })
}
