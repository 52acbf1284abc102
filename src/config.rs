//! Runtime configuration: defaults, then an optional TOML file, then CLI flags.
//!
//! The file lives at `<config dir>/contact-form/config.toml`. A missing file at
//! the default location is not an error; a missing file passed explicitly is.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    log: LogSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    print_json: Option<bool>,
}

/// Values supplied on the command line; `None`/`false` defers to the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub print_json: bool,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum level written to the log file.
    pub log_level: LevelFilter,
    /// Where to write the log. Logging is disabled when unset.
    pub log_file: Option<PathBuf>,
    /// Print the last submitted values as JSON on exit.
    pub print_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
            print_json: false,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("contact-form").join("config.toml"))
    }

    /// Loads the config from `path`, or from [`Config::default_path`] when
    /// `path` is `None`, then applies `overrides`.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(explicit) => read_file(explicit)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => read_file(&default)?,
                _ => FileConfig::default(),
            },
        };
        Self::resolve(file, overrides)
    }

    /// Parses config from TOML text, then applies `overrides`.
    pub fn from_toml(text: &str, overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = parse(text, Path::new("<inline>"))?;
        Self::resolve(file, overrides)
    }

    fn resolve(file: FileConfig, overrides: &Overrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let log_level = match overrides.log_level.as_deref().or(file.log.level.as_deref()) {
            Some(level) => parse_level(level)?,
            None => defaults.log_level,
        };
        Ok(Self {
            log_level,
            log_file: overrides.log_file.clone().or(file.log.file),
            print_json: overrides.print_json || file.output.print_json.unwrap_or(defaults.print_json),
        })
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, path)
}

fn parse(text: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`), ignoring case.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}
