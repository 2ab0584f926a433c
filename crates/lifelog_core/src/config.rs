//! Application configuration.
//!
//! # Responsibility
//! - Load settings from a TOML file with sensible defaults for every field.
//! - Keep the remote store endpoint and logging knobs in one place.
//!
//! # Invariants
//! - A missing file is not an error; defaults apply.
//! - Unknown keys in the file are ignored.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the remote JSON document store, without a trailing slash.
    #[serde(default = "default_store_url")]
    pub store_url: String,
    /// Per-request timeout for store calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` leaves file logging
    /// off.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_store_url() -> String {
    String::new()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    if cfg!(debug_assertions) {
        "debug".to_string()
    } else {
        "info".to_string()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse config file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
