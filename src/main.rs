//! # vslug CLI
//!
//! Command-line interface for the vietslug slug generator. A thin shell:
//! it collects the text and the two optional parameters, calls the slug
//! pipeline exactly once, and prints the result.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use vietslug::{config::GlobalConfig, slug, suffix::SuffixMode};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/vietslug/config      TOML defaults for --max-len and --suffix

Suffix Modes:
  none        No suffix (default)
  random4     4 random lowercase hex digits
  random6     6 random lowercase hex digits
  date        Local date, YYYYMMDD
  datetime    Local date and time, YYYYMMDDhhmm

Examples:
  vslug \"Tôi Thấy Hoa Vàng Trên Cỏ Xanh\"      toi-thay-hoa-vang-tren-co-xanh
  vslug \"Sài Gòn – Hà Nội\"                    sai-gon-ha-noi
  vslug \"hello world again\" --max-len 11      hello-world
  vslug \"release notes\" --suffix date         release-notes-20260109
  echo \"Đặc sản\" | vslug                      dac-san";

#[derive(Parser)]
#[command(name = "vslug")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Converts Unicode text into URL-safe ASCII slugs")]
#[command(
    long_about = "vslug converts arbitrary Unicode text into URL-safe slugs: lowercase ASCII \
letters and digits separated by single hyphens, with no leading, trailing, or doubled \
separators.

Vietnamese gets first-class treatment (đ/Đ and the full diacritic set fold to their base \
letters), every Unicode dash variant is unified to a plain hyphen, and characters with no \
ASCII representation are dropped. Length bounds cut at token boundaries when possible, and \
slugs can carry a random or timestamp suffix for disambiguation."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Text to slugify (reads stdin when omitted)
    text: Option<String>,

    /// Maximum slug length (non-negative integer)
    #[arg(short = 'n', long, value_name = "LEN", allow_hyphen_values = true)]
    max_len: Option<String>,

    /// Suffix mode: none, random4, random6, date, datetime
    #[arg(short, long, value_name = "MODE")]
    suffix: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "vslug", &mut std::io::stdout());
        return Ok(());
    }

    let config = GlobalConfig::load()?;

    // Lenient bound handling: an unparseable or negative value is a
    // warning and means "unbounded", never a hard error
    let max_len = match cli.max_len.as_deref() {
        None => config.max_len,
        Some(raw) => {
            let parsed = parse_max_len(raw);
            if parsed.is_none() {
                eprintln!(
                    "{} max-len must be a non-negative integer, treating {raw:?} as unbounded",
                    "warning:".yellow().bold()
                );
            }
            parsed
        }
    };

    // Unknown mode names silently mean "none"
    let mode = SuffixMode::parse(
        cli.suffix
            .as_deref()
            .or(config.suffix.as_deref())
            .unwrap_or("none"),
    );

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    println!("{}", slug::slugify_with(&text, max_len, mode));

    Ok(())
}

/// Parses a `--max-len` value: `Some` for a non-negative integer, `None`
/// for anything else (negative, non-numeric, empty).
fn parse_max_len(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}
