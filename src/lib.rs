//! `lfmt` — Reformat and colorize logfmt log lines from stdin.
//!
//! This library provides the core decoding and formatting functionality for
//! the `lfmt` CLI tool. It tokenizes logfmt lines (`key=value key2="quoted
//! value"`), decodes each into a [`Record`] with a distinguished severity
//! level and timestamp, applies level and field filtering, and renders a
//! colorized single-line representation.
//!
//! # Example
//!
//! ```
//! use lfmt::{Config, Record, format_record, scan_line};
//!
//! let pairs = scan_line(r#"time="2025-03-15T10:32:23Z" level=debug msg="bar""#).unwrap();
//! let record = Record::decode(pairs, false).unwrap();
//! let line = format_record(&record, &Config::default(), false).unwrap();
//! assert_eq!(line, "2025-03-15 10:32:23 [DEBUG] msg=bar");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod level;
pub mod record;
pub mod scanner;
pub mod stream;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::LfmtError;
pub use formatter::format_record;
pub use level::Level;
pub use record::Record;
pub use scanner::scan_line;
pub use stream::run;
