//! The streaming pump: read lines, decode, filter, format, write.
//!
//! Single-threaded cooperative pull loop. Each line is scanned into tokens,
//! decoded into a [`Record`], gated on level and field filters, and rendered
//! through the formatter. Decode and write errors abort the run immediately;
//! there is no skip-and-continue for malformed input.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::LfmtError;
use crate::formatter;
use crate::record::Record;
use crate::scanner;

/// Process the input stream to completion.
///
/// EOF ends the run without error. Returns the first decode or I/O error
/// encountered; nothing after the failing line is processed.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &Config,
    use_color: bool,
) -> Result<(), LfmtError> {
    for line in reader.lines() {
        let line = line?;
        let pairs = scanner::scan_line(&line)?;
        let record = Record::decode(pairs, config.raw)?;

        if record.level < config.level {
            continue;
        }
        if !config.filter.is_empty() && !record.matches_filter(&config.filter) {
            continue;
        }

        if let Some(rendered) = formatter::format_record(&record, config, use_color) {
            writeln!(writer, "{rendered}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
