//! `.footnote[...]` blocks become Quarto inline footnotes `^[...]`.

use super::lines::push_fragment;
use tracing::warn;

const FOOTNOTE_OPEN: &str = ".footnote[";

/// Rewrite single- and multi-line footnote blocks into `^[...]` spans.
///
/// A multi-line block ends at the first line whose trimmed text ends with
/// `]`; without one it runs to end-of-document.
pub fn convert_footnotes(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        if !line.trim().starts_with(FOOTNOTE_OPEN) {
            out.push(line.clone());
            i += 1;
            continue;
        }

        let start = line.find('[').map_or(0, |p| p + 1);
        let head = line.trim_end();
        let mut content: Vec<&str> = Vec::new();

        if head.ends_with(']') && head.len() > start {
            content.push(head[start..head.len() - 1].trim());
            i += 1;
        } else {
            content.push(line[start..].trim_end());
            i += 1;
            while i < lines.len() && !lines[i].trim().ends_with(']') {
                content.push(lines[i].trim_end());
                i += 1;
            }
            match lines.get(i) {
                Some(last) => {
                    let end = last.rfind(']').unwrap_or(last.len());
                    content.push(last[..end].trim_end());
                    i += 1;
                }
                None => warn!("Footnote runs to end of document"),
            }
        }

        push_fragment(&mut out, &format!("^[{}]\n", content.join("\n").trim()));
    }
    out
}
