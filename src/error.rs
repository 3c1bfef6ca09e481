//! Error types for price lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = PriceError> = std::result::Result<T, E>;

/// Everything that can go wrong between reading the config and printing a price.
#[derive(Debug, Error)]
pub enum PriceError {
    /// Config file could not be read.
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or does not match the schema.
    #[error("failed to parse config file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Daily log file could not be opened.
    #[error("failed to open log file {}: {}", .path.display(), .source)]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pricing service answered with a non-success status.
    #[error("price request failed with status code {status} ({reason})")]
    RemoteRequest { status: u16, reason: String },

    /// The response body is not a JSON object.
    #[error("malformed price response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// A required price field is absent from the response.
    #[error("price response is missing field `{0}`")]
    MissingField(&'static str),

    /// A required price field is present but not a number.
    #[error("price response field `{field}` is not a number (found {found})")]
    InvalidField { field: &'static str, found: String },

    /// Connection, TLS, timeout or body read failure.
    #[error("request to pricing service failed: {0}")]
    Transport(#[from] wreq::Error),
}

impl PriceError {
    /// Returns true for config read or parse failures.
    pub fn is_config(&self) -> bool {
        matches!(self, PriceError::ConfigRead { .. } | PriceError::ConfigParse { .. })
    }
}
