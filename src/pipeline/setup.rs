//! knitr setup boilerplate.
//!
//! Quarto sets chunk options in the YAML header or per chunk, and the
//! pdfcrop hook only makes sense for PDF output, so both are removed from
//! the deck's setup chunk.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

const CROP_HOOK: &str = "knitr::knit_hooks$set(crop = knitr::hook_pdfcrop)";

static RE_OPTS_CHUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*knitr::opts_chunk\$set\s*\(").unwrap());
static RE_CLOSE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\)\s*$").unwrap());

/// Drop the pdfcrop hook and `knitr::opts_chunk$set(...)` calls.
///
/// The call is dropped together with every line through the first lone `)`.
pub fn remove_setup_calls(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        if line.contains(CROP_HOOK) {
            i += 1;
            continue;
        }
        if RE_OPTS_CHUNK.is_match(line) {
            let start = i;
            i += 1;
            while i < lines.len() && !RE_CLOSE_PAREN.is_match(&lines[i]) {
                i += 1;
            }
            if i == lines.len() {
                warn!("opts_chunk$set call at line {} is never closed", start + 1);
            }
            i += 1;
            debug!("Removed opts_chunk$set call at line {}", start + 1);
            continue;
        }
        out.push(line.clone());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lines::doc;

    #[test]
    fn test_multiline_opts_chunk_removed() {
        let input = doc(
            "```{r setup}\nknitr::opts_chunk$set(\n  echo = FALSE,\n  fig.align = \"center\"\n)\nlibrary(ggplot2)\n```\n",
        );
        let out = remove_setup_calls(&input);
        assert_eq!(out, doc("```{r setup}\nlibrary(ggplot2)\n```\n"));
    }

    #[test]
    fn test_opts_chunk_consumes_through_lone_paren() {
        let input = doc("  knitr::opts_chunk$set(echo = TRUE)\nx <- c(\n1\n)\nkeep\n");
        let out = remove_setup_calls(&input);
        assert_eq!(out, doc("keep\n"));
    }

    #[test]
    fn test_crop_hook_removed() {
        let input = doc("knitr::knit_hooks$set(crop = knitr::hook_pdfcrop)\nkeep\n");
        assert_eq!(remove_setup_calls(&input), doc("keep\n"));
    }

    #[test]
    fn test_unclosed_call_consumes_rest() {
        let input = doc("knitr::opts_chunk$set(\n  echo = FALSE,\n```\n");
        assert!(remove_setup_calls(&input).is_empty());
    }

    #[test]
    fn test_other_knitr_calls_kept() {
        let input = doc("knitr::opts_knit$set(root.dir = \"..\")\n");
        assert_eq!(remove_setup_calls(&input), input);
    }
}
