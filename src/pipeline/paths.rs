//! Path rewriting for the Quarto project layout.
//!
//! The converted deck lives one directory below the project root, next to
//! `data/`, `images/` and `R/`. R code therefore resolves paths through
//! `here::here()`, and markdown image links gain a `../` prefix.
//!
//! Both passes are plain per-line substitutions over the whole document,
//! applied once (the replacement text is never re-scanned).

use once_cell::sync::Lazy;
use regex::Regex;

static RE_FILE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"file\.path\((["'](?:data|images)["'],\s*[^)]*)\)"#).unwrap()
});
static RE_READ_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(read_table|read_csv|read_delim)\(\s*["'](data|images)/([^"']+)["']"#).unwrap()
});
static RE_SOURCE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"source\((["']R/[^"']+["'])"#).unwrap());
static RE_IMAGE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\((images|data)/").unwrap());

/// Route `file.path`, `read_*` and `source` paths through `here::here()`.
pub fn rewrite_code_paths(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| rewrite_code_line(l)).collect()
}

fn rewrite_code_line(line: &str) -> String {
    let line = RE_FILE_PATH.replace_all(line, "here::here(${1})");
    let line = RE_READ_CALL.replace_all(&line, r#"${1}(here::here("${2}", "${3}")"#);
    let line = RE_SOURCE_CALL.replace_all(&line, "source(here::here(${1})");
    line.into_owned()
}

/// Prefix `images/` and `data/` targets of markdown image links with `../`.
pub fn fix_image_links(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| RE_IMAGE_LINK.replace_all(l, "![${1}](../${2}/").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_wrapped() {
        assert_eq!(
            rewrite_code_line("df <- read.csv(file.path(\"data\", \"cars.csv\"))\n"),
            "df <- read.csv(here::here(\"data\", \"cars.csv\"))\n"
        );
    }

    #[test]
    fn test_file_path_other_root_untouched() {
        let line = "p <- file.path(\"output\", \"x.csv\")\n";
        assert_eq!(rewrite_code_line(line), line);
    }

    #[test]
    fn test_read_call_split() {
        assert_eq!(
            rewrite_code_line("res <- read_csv(\"data/results.csv\")\n"),
            "res <- read_csv(here::here(\"data\", \"results.csv\"))\n"
        );
        assert_eq!(
            rewrite_code_line("read_delim( 'images/meta.tsv', \"\\t\")\n"),
            "read_delim(here::here(\"images\", \"meta.tsv\"), \"\\t\")\n"
        );
    }

    #[test]
    fn test_source_wrapped() {
        assert_eq!(
            rewrite_code_line("source(\"R/helpers.R\", local = TRUE)\n"),
            "source(here::here(\"R/helpers.R\"), local = TRUE)\n"
        );
    }

    #[test]
    fn test_all_rewrites_on_one_line() {
        let line = "source('R/a.R'); x <- read_table(\"data/t.txt\")\n";
        assert_eq!(
            rewrite_code_line(line),
            "source(here::here('R/a.R')); x <- read_table(here::here(\"data\", \"t.txt\"))\n"
        );
    }

    #[test]
    fn test_image_links_prefixed() {
        let lines = vec![
            "![x](images/fig.png)\n".to_string(),
            "See ![](data/map.png){width=50%} and [link](images/a.png)\n".to_string(),
            "![remote](https://example.org/images/a.png)\n".to_string(),
        ];
        let out = fix_image_links(&lines);
        assert_eq!(out[0], "![x](../images/fig.png)\n");
        assert_eq!(out[1], "See ![](../data/map.png){width=50%} and [link](images/a.png)\n");
        assert_eq!(out[2], lines[2]);
    }

    #[test]
    fn test_rewritten_lines_left_alone() {
        let lines: Vec<String> = [
            "scores <- read_csv(here::here(\"data\", \"x.csv\"))\n",
            "source(here::here(\"R/a.R\"))\n",
            "df <- read.csv(here::here(\"data\", \"cars.csv\"))\n",
            "![](../images/a.png){width=50%}\n",
        ]
        .iter()
        .map(|l| l.to_string())
        .collect();
        assert_eq!(rewrite_code_paths(&lines), lines);
        assert_eq!(fix_image_links(&lines), lines);

        let raw = vec!["source(\"R/a.R\"); d <- read_csv(\"data/x.csv\")\n".to_string()];
        let once = rewrite_code_paths(&raw);
        assert_ne!(once, raw);
        assert_eq!(rewrite_code_paths(&once), once);
    }
}
