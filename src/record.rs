//! Decoded representation of one log line.
//!
//! [`Record::decode`] consumes the scanner's `(key, value)` pairs, pulling
//! out the severity level and timestamp and keeping every other field in
//! first-seen order. Also home to the value classification helpers shared
//! with the formatter (numeric/boolean/null detection).

use std::collections::HashMap;

use indexmap::IndexMap;
use jiff::civil;

use crate::error::LfmtError;
use crate::level::Level;

/// Keys recognized as carrying the record timestamp (case-sensitive).
pub const TIME_KEYS: &[&str] = &["time", "timestamp", "datetime", "ts", "t"];

/// One decoded log line.
///
/// Constructed once per input line, read-only afterwards.
#[derive(Debug)]
pub struct Record {
    /// Severity level; `Info` when absent or unrecognized.
    pub level: Level,
    /// Timestamp as written by the producer (same offset as parsed, no UTC
    /// conversion); `None` when no time-labeled field was present.
    pub time: Option<civil::DateTime>,
    /// Remaining fields in first-seen order. Duplicate keys overwrite the
    /// value but keep the original position.
    pub fields: IndexMap<String, String>,
}

impl Record {
    /// Decode one line's pairs into a [`Record`].
    ///
    /// The level token and time token are consumed into their dedicated
    /// slots; in raw mode they are additionally retained as ordinary fields
    /// so `--raw` output reproduces the full line. A malformed timestamp is
    /// a hard error for the whole run.
    pub fn decode(pairs: Vec<(String, String)>, raw: bool) -> Result<Self, LfmtError> {
        let mut record = Self {
            level: Level::Info,
            time: None,
            fields: IndexMap::new(),
        };

        for (key, value) in pairs {
            if key.eq_ignore_ascii_case("level") {
                record.level = Level::from_label(&value).unwrap_or(Level::Info);
                if !raw {
                    continue;
                }
            } else if TIME_KEYS.contains(&key.as_str()) {
                record.time = Some(parse_rfc3339(&value)?);
                if !raw {
                    continue;
                }
            }
            record.fields.insert(key, value);
        }

        Ok(record)
    }

    /// Check every filter entry for an exact match against this record.
    ///
    /// A field absent from the record compares as the empty string, so a
    /// `key=` filter matches records without that field.
    pub fn matches_filter(&self, filter: &HashMap<String, String>) -> bool {
        filter
            .iter()
            .all(|(key, value)| self.fields.get(key).map_or("", String::as_str) == value)
    }
}

/// Parse a strict RFC 3339 timestamp, keeping the writer's wall clock.
///
/// The `jiff::Timestamp` parse enforces the RFC 3339 profile (offset
/// required); the civil re-parse of the same string retains the local
/// datetime as written, so output stays in the producer's offset.
fn parse_rfc3339(value: &str) -> Result<civil::DateTime, LfmtError> {
    let timestamp_err = |source| LfmtError::Timestamp {
        value: value.to_string(),
        source,
    };
    value
        .parse::<jiff::Timestamp>()
        .map_err(timestamp_err)?;
    value.parse::<civil::DateTime>().map_err(timestamp_err)
}

/// True if the value parses as an integer or floating point number.
pub fn is_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// True if the value is one of the boolean literals accepted by Go's
/// `strconv.ParseBool`, which the logfmt convention inherited.
pub fn is_boolean(s: &str) -> bool {
    matches!(
        s,
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
    )
}

/// True if the value is a null literal from any of the usual producers.
pub fn is_null(s: &str) -> bool {
    matches!(s, "null" | "NULL" | "nil" | "<nil>" | "None")
}
