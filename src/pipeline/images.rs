//! Image-only code chunks.
//!
//! Decks routinely show a figure with a chunk like
//!
//! ````text
//! ```{r, out.width = "80%"}
//! knitr::include_graphics(file.path("images", "plot.png"))
//! ```
//! ````
//!
//! Quarto can size a plain markdown image directly, so the whole chunk is
//! replaced by `![](images/plot.png){width=80%}`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

const GRAPHICS_CALL: &str = "knitr::include_graphics";

static RE_CHUNK_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```\{r([^}]*)\}").unwrap());
static RE_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"out\.width\s*=\s*["']?([\d.]+%)["']?"#).unwrap());
static RE_HEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"out\.height\s*=\s*["']?([\d.]+)["']?"#).unwrap());
static RE_GRAPHICS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"knitr::include_graphics\((.*)\)").unwrap());
static RE_FILE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"file\.path\((.*?)\)").unwrap());
static RE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^["']([^"']*)["']"#).unwrap());

fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Replace chunks that only render an image with a sized markdown image.
pub fn convert_image_chunks(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some(replacement) = RE_CHUNK_OPEN
            .captures(&lines[i])
            .and_then(|caps| image_for_chunk(lines, i, &caps[1]))
        {
            let (image, next) = replacement;
            out.push(image);
            i = next;
            continue;
        }
        out.push(lines[i].clone());
        i += 1;
    }
    out
}

/// Build the image line for the chunk opened at `open`, if it renders one.
///
/// Returns the markdown line and the index just past the closing fence.
fn image_for_chunk(lines: &[String], open: usize, options: &str) -> Option<(String, usize)> {
    let body_end = (open + 1..lines.len())
        .find(|&j| is_fence(&lines[j]))
        .unwrap_or(lines.len());
    let call_line = lines[open + 1..body_end]
        .iter()
        .find(|l| l.contains(GRAPHICS_CALL))?;
    let path_expr = RE_GRAPHICS.captures(call_line.trim())?;
    let path = resolve_path(&path_expr[1]);

    if body_end == lines.len() {
        warn!("Image chunk opened at line {} is never closed", open + 1);
    }
    debug!("Image chunk at line {} -> {}", open + 1, path);

    let size = size_attribute(options);
    Some((format!("![]({path}){size}\n"), body_end + 1))
}

/// `{width=..}` from `out.width`, else `{height=..}` from `out.height`.
fn size_attribute(options: &str) -> String {
    if let Some(w) = RE_WIDTH.captures(options) {
        format!("{{width={}}}", &w[1])
    } else if let Some(h) = RE_HEIGHT.captures(options) {
        format!("{{height={}}}", &h[1])
    } else {
        String::new()
    }
}

/// Resolve the argument of an `include_graphics` call to a path.
///
/// `file.path("a", "b")` joins its segments with `/`; a quoted literal is
/// taken as-is; anything else is passed through without its quotes.
fn resolve_path(expr: &str) -> String {
    if let Some(caps) = RE_FILE_PATH.captures(expr) {
        return caps[1]
            .split(',')
            .map(unquote)
            .collect::<Vec<_>>()
            .join("/");
    }
    let expr = expr.trim();
    match RE_QUOTED.captures(expr) {
        Some(caps) => caps[1].to_string(),
        None => unquote(expr).to_string(),
    }
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lines::doc;

    #[test]
    fn test_file_path_chunk_with_width() {
        let input = doc(
            "```{r, echo=FALSE, out.width=\"80%\"}\nknitr::include_graphics(file.path(\"images\", \"plot.png\"))\n```\nafter\n",
        );
        let out = convert_image_chunks(&input);
        assert_eq!(out, doc("![](images/plot.png){width=80%}\nafter\n"));
    }

    #[test]
    fn test_quoted_path_with_height() {
        let input = doc("```{r fig, out.height='300px'}\nknitr::include_graphics('images/logo.svg')\n```\n");
        let out = convert_image_chunks(&input);
        assert_eq!(out, doc("![](images/logo.svg){height=300}\n"));
    }

    #[test]
    fn test_width_wins_over_height() {
        assert_eq!(
            size_attribute(", out.height = \"200\", out.width = 50%"),
            "{width=50%}"
        );
    }

    #[test]
    fn test_no_size_hint() {
        let input = doc("```{r}\nknitr::include_graphics(\"a.png\")\n```\n");
        assert_eq!(convert_image_chunks(&input), doc("![](a.png)\n"));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(resolve_path("\"images/a.png\", dpi = 300"), "images/a.png");
    }

    #[test]
    fn test_multi_segment_file_path() {
        assert_eq!(
            resolve_path("file.path(\"images\", 'week1', \"fig.png\")"),
            "images/week1/fig.png"
        );
    }

    #[test]
    fn test_chunk_without_graphics_passthrough() {
        let input = doc("```{r}\nplot(cars)\n```\n");
        assert_eq!(convert_image_chunks(&input), input);
    }

    #[test]
    fn test_graphics_after_fence_not_claimed() {
        let input = doc("```{r}\nx <- 1\n```\nknitr::include_graphics(\"a.png\")\n");
        assert_eq!(convert_image_chunks(&input), input);
    }

    #[test]
    fn test_unclosed_chunk_consumed() {
        let input = doc("```{r}\nknitr::include_graphics(\"a.png\")\ntrailing\n");
        assert_eq!(convert_image_chunks(&input), doc("![](a.png)\n"));
    }

    #[test]
    fn test_non_r_chunk_ignored() {
        let input = doc("```{python}\nknitr::include_graphics(\"a.png\")\n```\n");
        assert_eq!(convert_image_chunks(&input), input);
    }
}
