//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/lfmt/config.toml` or `$XDG_CONFIG_HOME/lfmt/config.toml`)
//! 3. Built-in defaults

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LfmtError;
use crate::level::Level;

/// Runtime configuration governing one run.
///
/// Built once before processing begins and shared read-only across every
/// record. Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum log level to emit; records below this are suppressed.
    pub level: Level,
    /// Ordered field selection; empty means include all fields.
    pub output_fields: Vec<String>,
    /// Fields to suppress, applied after selection.
    pub exclude_fields: Vec<String>,
    /// Exact-match field filters; a record must match every entry.
    pub filter: HashMap<String, String>,
    /// With `output_fields`: emit the named fields first, then the rest in
    /// original order, instead of dropping the rest.
    pub all_fields: bool,
    /// Emit bare values only, without keys or level/time framing.
    pub raw: bool,
    /// Suppress the timestamp column.
    pub no_time: bool,
    /// Emit lines whose field portion renders empty instead of dropping them.
    pub keep_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            level: Level::Trace,
            output_fields: Vec::new(),
            exclude_fields: Vec::new(),
            filter: HashMap::new(),
            all_fields: false,
            raw: false,
            no_time: false,
            keep_empty: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, LfmtError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(&file_config)?;
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(level) = cli.level {
            config.level = level;
        }
        if let Some(ref output) = cli.output {
            config.output_fields.clone_from(output);
        }
        if let Some(ref exclude) = cli.exclude {
            config.exclude_fields.clone_from(exclude);
        }
        if let Some(ref filter) = cli.filter {
            config.filter = parse_filter_entries(filter)?;
        }
        if cli.all {
            config.all_fields = true;
        }
        if cli.raw {
            config.raw = true;
        }
        if cli.no_time {
            config.no_time = true;
        }
        if cli.keep_empty {
            config.keep_empty = true;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/lfmt/config.toml` or
    /// `~/.config/lfmt/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("lfmt").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("lfmt")
                .join("config.toml")
        } else {
            PathBuf::from(".config/lfmt/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: &FileConfig) -> Result<(), LfmtError> {
        if let Some(ref color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(ref level) = file.level {
            self.level = Level::from_label(level)
                .ok_or_else(|| LfmtError::Config(format!("invalid log level: {level}")))?;
        }

        if let Some(ref exclude) = file.exclude {
            self.exclude_fields.clone_from(exclude);
        }
        if let Some(no_time) = file.no_time {
            self.no_time = no_time;
        }
        if let Some(keep_empty) = file.keep_empty {
            self.keep_empty = keep_empty;
        }

        Ok(())
    }
}

/// Parse `key=value` filter entries into an exact-match map.
///
/// Splits on the first `=` so values may themselves contain `=`.
pub fn parse_filter_entries(entries: &[String]) -> Result<HashMap<String, String>, LfmtError> {
    let mut filter = HashMap::new();
    for entry in entries {
        let entry = entry.trim();
        let Some((key, value)) = entry.split_once('=') else {
            return Err(LfmtError::Config(format!("invalid filter: {entry}")));
        };
        filter.insert(key.to_string(), value.to_string());
    }
    Ok(filter)
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    level: Option<String>,
    exclude: Option<Vec<String>>,
    no_time: Option<bool>,
    keep_empty: Option<bool>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, LfmtError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LfmtError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
