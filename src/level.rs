//! Log level representation with parsing, display, and colorization.
//!
//! Recognizes the alias spellings used by common logging libraries and
//! syslog (`WARN`/`WARNING`, `ERR`/`EROR`/`ERROR`, `CRIT`/`ALERT`/`EMERG`,
//! ...), collapsing them into six canonical severities. Unrecognized level
//! values are normalized to [`Info`](Level::Info) by the record decoder
//! rather than rejected.

use std::fmt;

use owo_colors::Style;

/// Canonical log level enumeration.
///
/// Ordered by severity (ascending) for `>=` threshold filtering via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// Display label for the level, without brackets (e.g., `"DEBUG"`, `"WARN"`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the [`Style`] for this level's badge when colors are enabled.
    ///
    /// Inverse-video scheme: the badge text sits on a colored background so
    /// levels stand out at a glance in dense output.
    pub const fn style(self) -> Style {
        match self {
            Self::Trace => Style::new().black().on_white().bold(),
            Self::Debug => Style::new().black().on_cyan().bold(),
            Self::Info => Style::new().black().on_green().bold(),
            Self::Warning => Style::new().black().on_yellow().bold(),
            Self::Error => Style::new().black().on_red().bold(),
            Self::Fatal => Style::new().red().on_black().bold(),
        }
    }

    /// Parse a level value into a [`Level`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings; callers decide whether that
    /// is a fallback-to-Info situation (record decoding) or a hard error
    /// (the `--level` flag).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Some(Self::Trace),
            "DBUG" | "DEBUG" => Some(Self::Debug),
            "INFO" | "INFORMATION" | "INFORMATIONAL" | "NOTICE" => Some(Self::Info),
            "WARN" | "WARNING" => Some(Self::Warning),
            "ERR" | "EROR" | "ERROR" => Some(Self::Error),
            "EMERG" | "FATAL" | "ALERT" | "CRIT" | "CRITICAL" => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
