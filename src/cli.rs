//! Command-line argument definitions for `lfmt`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};

use crate::level::Level;

/// Reformat and colorize logfmt log lines from stdin.
///
/// Reads `key=value` structured log lines from stdin and writes a colorized
/// human-readable rendition to stdout.
#[derive(Debug, Parser)]
#[command(name = "lfmt", version, about, long_about = None)]
pub struct Cli {
    /// Minimum severity level to display.
    ///
    /// One of trace, debug, info, warn, error, fatal (case-insensitive).
    /// Lines below this level are suppressed.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub level: Option<Level>,

    /// Only show these fields (comma-separated), in the given order.
    #[arg(short = 'o', long, value_delimiter = ',')]
    pub output: Option<Vec<String>>,

    /// Hide these fields (comma-separated).
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Only show lines whose fields match these key=value pairs exactly
    /// (comma-separated).
    #[arg(short = 'f', long, value_delimiter = ',')]
    pub filter: Option<Vec<String>>,

    /// With --output: show the named fields first, then all remaining fields
    /// in their original order, instead of hiding them.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Output bare field values only, without keys, level, or timestamp.
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Hide the timestamp column.
    #[arg(long)]
    pub no_time: bool,

    /// Keep lines whose field portion is empty instead of dropping them.
    #[arg(short = 'k', long)]
    pub keep_empty: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse the `--level` argument, case-insensitive.
///
/// Unlike level values inside log lines, an unrecognized threshold is a
/// configuration error rather than a silent Info fallback.
fn parse_level_arg(s: &str) -> Result<Level, String> {
    Level::from_label(s).ok_or_else(|| {
        format!("invalid level '{s}': expected one of trace, debug, info, warn, error, fatal")
    })
}
