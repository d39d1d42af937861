//! Two-column layouts.
//!
//! xaringan lays out columns with `.pull-left[ … ]` / `.pull-right[ … ]`
//! (or the `.two-column-*` spelling from some themes). Quarto wants a
//! `:::: {.columns}` container holding two `::: {.column}` divs. A lone
//! left or right block still gets the full container, with the other
//! column left empty, so the layout width stays the same.

use super::lines::{collect_until, is_blank};
use tracing::{debug, warn};

const LEFT_OPENERS: [&str; 2] = [".pull-left[", ".two-column-left["];
const RIGHT_OPENERS: [&str; 2] = [".pull-right[", ".two-column-right["];

const CONTAINER_OPEN: &str = ":::: {.columns}\n";
const CONTAINER_CLOSE: &str = "::::\n";
const COLUMN_OPEN: &str = "::: {.column width=\"50%\"}\n";
const COLUMN_CLOSE: &str = ":::\n";

fn is_left(line: &str) -> bool {
    LEFT_OPENERS.contains(&line.trim())
}

fn is_right(line: &str) -> bool {
    RIGHT_OPENERS.contains(&line.trim())
}

fn is_block_close(line: &str) -> bool {
    line.trim() == "]"
}

/// Pause markers that may sit between a left and a right block.
fn is_pause(line: &str) -> bool {
    matches!(line.trim(), "--" | ". . .")
}

/// Rewrite left/right blocks into Quarto column containers.
pub fn convert_columns(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 16);
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];

        if is_left(line) {
            let left = collect_until(lines, i + 1, is_block_close);
            if !left.terminated {
                warn!("Left column opened at line {} is never closed", i + 1);
            }
            i = left.next;
            while i < lines.len() && (is_pause(&lines[i]) || is_blank(&lines[i])) {
                i += 1;
            }

            if i < lines.len() && is_right(&lines[i]) {
                let right = collect_until(lines, i + 1, is_block_close);
                if !right.terminated {
                    warn!("Right column opened at line {} is never closed", i + 1);
                }
                debug!("Paired columns ending at line {}", right.next);
                emit_container(&mut out, &left.lines, &right.lines);
                i = right.next;
            } else {
                emit_container(&mut out, &left.lines, &[]);
            }
        } else if is_right(line) {
            let right = collect_until(lines, i + 1, is_block_close);
            if !right.terminated {
                warn!("Right column opened at line {} is never closed", i + 1);
            }
            emit_container(&mut out, &[], &right.lines);
            i = right.next;
        } else {
            out.push(line.clone());
            i += 1;
        }
    }
    out
}

fn emit_container(out: &mut Vec<String>, left: &[String], right: &[String]) {
    out.push(CONTAINER_OPEN.to_string());
    out.push("\n".to_string());
    for column in [left, right] {
        out.push(COLUMN_OPEN.to_string());
        out.extend_from_slice(column);
        out.push("\n".to_string());
        out.push(COLUMN_CLOSE.to_string());
        out.push("\n".to_string());
    }
    out.push(CONTAINER_CLOSE.to_string());
    out.push("\n".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lines::doc;

    const EMPTY_RIGHT: &str = ":::: {.columns}\n\n::: {.column width=\"50%\"}\nA\n\n:::\n\n::: {.column width=\"50%\"}\n\n:::\n\n::::\n\n";

    #[test]
    fn test_paired_columns_single_container() {
        let input = doc(".pull-left[\nA\n]\n.pull-right[\nB\n]\n");
        let out = convert_columns(&input);
        assert_eq!(
            out.concat(),
            ":::: {.columns}\n\n::: {.column width=\"50%\"}\nA\n\n:::\n\n::: {.column width=\"50%\"}\nB\n\n:::\n\n::::\n\n"
        );
        assert_eq!(out.iter().filter(|l| l.as_str() == CONTAINER_OPEN).count(), 1);
    }

    #[test]
    fn test_pair_separated_by_pause_and_blanks() {
        let input = doc(".two-column-left[\nA\n]\n\n--\n\n.two-column-right[\nB\n]\nafter\n");
        let out = convert_columns(&input).concat();
        assert_eq!(out.matches(":::: {.columns}").count(), 1);
        assert!(out.contains("A\n\n:::\n\n::: {.column width=\"50%\"}\nB\n"));
        assert!(out.ends_with("::::\n\nafter\n"));
    }

    #[test]
    fn test_unpaired_left() {
        let input = doc(".pull-left[\nA\n]\n");
        assert_eq!(convert_columns(&input).concat(), EMPTY_RIGHT);
    }

    #[test]
    fn test_unpaired_left_followed_by_text() {
        let input = doc(".pull-left[\nA\n]\n\nMore\n");
        let out = convert_columns(&input).concat();
        assert_eq!(out, format!("{EMPTY_RIGHT}More\n"));
    }

    #[test]
    fn test_lone_right_mirrors() {
        let input = doc("  .pull-right[\nB\n  ]\n");
        assert_eq!(
            convert_columns(&input).concat(),
            ":::: {.columns}\n\n::: {.column width=\"50%\"}\n\n:::\n\n::: {.column width=\"50%\"}\nB\n\n:::\n\n::::\n\n"
        );
    }

    #[test]
    fn test_unterminated_left_flushed_at_end() {
        let input = doc(".pull-left[\nA\n");
        assert_eq!(convert_columns(&input).concat(), EMPTY_RIGHT);
    }

    #[test]
    fn test_nested_brackets_not_block_close() {
        let input = doc(".pull-left[\nx[1]\n]\n");
        let out = convert_columns(&input).concat();
        assert!(out.contains("\nx[1]\n\n:::\n"));
    }

    #[test]
    fn test_plain_lines_passthrough() {
        let input = doc("# Title\n.pull-leftish[\n]\n");
        assert_eq!(convert_columns(&input), input);
    }
}
