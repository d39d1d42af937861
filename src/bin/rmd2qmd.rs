//! CLI binary for xaringan2qmd.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and reports the result.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xaringan2qmd::{convert_file, ConversionConfig, ConversionStats};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a deck next to the Quarto project's data/ and images/
  rmd2qmd slides/week1.Rmd quarto/week1/index.qmd

  # Replace the title and drop an extra helper line
  rmd2qmd --title "Week 1" --remove-pattern 'xaringanthemer::' week1.Rmd week1.qmd

  # Print per-stage statistics as JSON
  rmd2qmd --json week1.Rmd week1.qmd

WHAT GETS REWRITTEN:
  YAML header            only `title:` is kept
  ???                    ::: {.notes} … :::
  ---, class: lines      removed
  --                     . . .  (or removed between list items)
  .pull-left[ / .pull-right[    :::: {.columns} with two 50% columns
  include_graphics chunks       ![](path){width=..}
  knitr::opts_chunk$set(...)    removed
  file.path/read_*/source       wrapped in here::here()
  ![..](images/..)              ![..](../images/..)
  .footnote[...]                ^[...]
"#;

/// Convert xaringan R Markdown slides to Quarto markdown.
#[derive(Parser, Debug)]
#[command(
    name = "rmd2qmd",
    version,
    about = "Convert xaringan R Markdown slides to Quarto markdown",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Source .Rmd deck.
    input: PathBuf,

    /// Destination .qmd file (overwritten if it exists).
    output: PathBuf,

    /// Replace the deck title.
    #[arg(long)]
    title: Option<String>,

    /// Extra regex; lines starting with a match are removed. Repeatable.
    #[arg(long = "remove-pattern", value_name = "REGEX")]
    remove_patterns: Vec<String>,

    /// Extra regex; matching lines are commented out with `# `. Repeatable.
    #[arg(long = "comment-pattern", value_name = "REGEX")]
    comment_patterns: Vec<String>,

    /// Do not apply the built-in remove/comment patterns.
    #[arg(long)]
    no_default_patterns: bool,

    /// Print conversion statistics as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage problems go to stdout with a plain failure status.
            println!("{}", e.render());
            std::process::exit(1);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert_file(&cli.input, &cli.output, &config).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?;
        println!("{json}");
    }
    if !cli.quiet {
        print_summary(&cli, &stats);
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder();
    if cli.no_default_patterns {
        builder = builder.clear_default_patterns();
    }
    if let Some(ref title) = cli.title {
        builder = builder.title(title);
    }
    for pattern in &cli.remove_patterns {
        builder = builder.remove_pattern(pattern);
    }
    for pattern in &cli.comment_patterns {
        builder = builder.comment_pattern(pattern);
    }
    builder.build().context("Invalid configuration")
}

fn print_summary(cli: &Cli, stats: &ConversionStats) {
    let changed: Vec<&str> = stats.changed_stages().map(|s| s.as_str()).collect();
    eprintln!(
        "{}  {}  →  {}  {}",
        green("✔"),
        cli.input.display(),
        bold(&cli.output.display().to_string()),
        dim(&format!(
            "{} → {} lines, {}ms",
            stats.input_lines, stats.output_lines, stats.duration_ms
        )),
    );
    if !changed.is_empty() {
        eprintln!("   {}", dim(&format!("rewritten by: {}", changed.join(", "))));
    }
}
