//! Error types for the `lfmt` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `lfmt`.
///
/// Maps to exit codes: [`Config`](Self::Config), [`Decode`](Self::Decode),
/// [`Timestamp`](Self::Timestamp) and [`Toml`](Self::Toml) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum LfmtError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed logfmt token stream. Aborts the whole run; a broken line
    /// usually means a broken upstream producer worth flagging loudly.
    #[error("failed to parse log line: {0}")]
    Decode(String),

    /// Malformed timestamp value in an otherwise well-formed line.
    #[error("failed to parse timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: jiff::Error,
    },

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
