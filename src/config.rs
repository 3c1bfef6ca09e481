//! Configuration loaded from a TOML file, with CLI overrides applied by the caller.

use crate::error::{PriceError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the daily log files
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Total request timeout in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Free-form options from the `[default]` section
    #[serde(default)]
    pub default: BTreeMap<String, String>,

    /// File this config was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
            format: OutputFormat::Text,
            default: BTreeMap::new(),
            source: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|source| PriceError::ConfigRead { path: path.to_path_buf(), source })?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|source| PriceError::ConfigParse { path: path.to_path_buf(), source })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Loads the explicit config file, or `config/config.toml` relative to the
    /// working directory. A missing file is an error in both cases.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        Self::from_file(path)
    }

    /// Request timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Output format for a price quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
