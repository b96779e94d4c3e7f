//! Colorized output formatter for decoded records.
//!
//! Renders one [`Record`] under the active [`Config`]:
//! - `YYYY-MM-DD HH:MM:SS` timestamp column (suppressed by `--no-time` or
//!   when the record carries no timestamp)
//! - right-aligned bracketed level badge on a colored background
//! - `key=value` field portion, with keys and value classes colorized
//! - field selection, exclusion and reordering per the config
//! - raw mode emitting bare values only
//!
//! Returns `None` to signal "drop this line" so an empty rendered payload
//! (kept via `--keep-empty`) stays distinguishable from a suppressed line.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};

use crate::config::Config;
use crate::level::Level;
use crate::record::{self, Record};

/// Badge column width when colors are enabled. ANSI escape sequences count
/// toward the string length but not the display width; the wider pad keeps
/// the visible column aligned with the no-color width below.
const BADGE_WIDTH_COLOR: usize = 26;

/// Badge column width without colors (`[FATAL]` is 7 characters).
const BADGE_WIDTH_PLAIN: usize = 7;

const KEY_STYLE: Style = Style::new().bright_blue();
const STRING_STYLE: Style = Style::new().bright_green();
const NUMBER_STYLE: Style = Style::new().magenta();
const NULL_STYLE: Style = Style::new().yellow();

/// Format a [`Record`] into its output line.
///
/// Returns `None` when the line should be dropped: the rendered field
/// portion is empty and `keep_empty` is off. Never fails; the record is
/// already validated by the decoder.
pub fn format_record(record: &Record, config: &Config, use_color: bool) -> Option<String> {
    let body = render_fields(record, config, use_color);

    if config.raw {
        let line = body.trim().to_string();
        if line.is_empty() && !config.keep_empty {
            return None;
        }
        return Some(line);
    }

    if body.is_empty() && !config.keep_empty {
        return None;
    }

    let mut line = String::new();
    if !config.no_time
        && let Some(time) = &record.time
    {
        let _ = write!(line, "{} ", time.strftime("%Y-%m-%d %H:%M:%S"));
    }
    line.push_str(&badge(record.level, use_color));
    line.push_str(&body);
    Some(line)
}

/// Render the field portion: each selected field prefixed with a space.
fn render_fields(record: &Record, config: &Config, use_color: bool) -> String {
    let mut body = String::new();
    for key in candidate_fields(record, config) {
        if config.exclude_fields.iter().any(|e| e == key) {
            continue;
        }
        // Fields named in the selection but absent from this record are
        // skipped silently; not every line carries every field.
        let Some(value) = record.fields.get(key) else {
            continue;
        };
        if config.raw {
            body.push(' ');
            body.push_str(value);
        } else {
            let _ = write!(
                body,
                " {}={}",
                paint(key, KEY_STYLE, use_color),
                format_value(value, use_color)
            );
        }
    }
    body
}

/// Determine the candidate field sequence for output.
///
/// - no selection → the record's first-seen order
/// - selection without `--all` → exactly the selected names, in that order
/// - selection with `--all` → selected names first, then the record's
///   remaining fields in their original relative order
fn candidate_fields<'a>(record: &'a Record, config: &'a Config) -> Vec<&'a str> {
    if config.output_fields.is_empty() {
        return record.fields.keys().map(String::as_str).collect();
    }
    let mut candidates: Vec<&str> = config.output_fields.iter().map(String::as_str).collect();
    if config.all_fields {
        candidates.extend(
            record
                .fields
                .keys()
                .map(String::as_str)
                .filter(|key| !config.output_fields.iter().any(|o| o == key)),
        );
    }
    candidates
}

/// Format a field value with its color class.
///
/// Numbers and booleans render as numbers, null literals as null, and
/// everything else as a string, re-quoted when it contains a space.
fn format_value(value: &str, use_color: bool) -> String {
    if record::is_numeric(value) || record::is_boolean(value) {
        return paint(value, NUMBER_STYLE, use_color);
    }
    if record::is_null(value) {
        return paint(value, NULL_STYLE, use_color);
    }
    if value.contains(' ') {
        paint(&format!("\"{value}\""), STRING_STYLE, use_color)
    } else {
        paint(value, STRING_STYLE, use_color)
    }
}

/// The bracketed, right-aligned level badge column.
fn badge(level: Level, use_color: bool) -> String {
    let badge = format!("[{}]", level.label());
    if use_color {
        let styled = badge.style(level.style()).to_string();
        format!("{styled:>BADGE_WIDTH_COLOR$}")
    } else {
        format!("{badge:>BADGE_WIDTH_PLAIN$}")
    }
}

fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
