//! Error types for startup configuration and the news service.
//!
//! - [`ConfigError`]: fatal problems found while resolving configuration; the
//!   process refuses to start.
//! - [`NewsError`]: failures of a single fetch-and-filter call; the web layer
//!   turns these into a generic message for the reader.

use thiserror::Error;

/// A configuration value is missing or unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} environment variable not set (or empty); the news API key is required")]
    MissingApiKey { var: &'static str },

    #[error("invalid news API URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid listen address {addr:?}: {source}")]
    InvalidListenAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// A fetch-and-filter call failed.
#[derive(Error, Debug)]
pub enum NewsError {
    /// Transport failure: connect error, timeout, TLS, body read.
    #[error("news API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("news API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not JSON at all.
    #[error("news API returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API reported `"status": "error"` in its payload.
    #[error("news API error {code}: {message}")]
    Upstream { code: String, message: String },

    /// Valid JSON, but not the shape of a search response.
    #[error("malformed news API payload: {0}")]
    MalformedPayload(String),
}

pub type Result<T> = std::result::Result<T, NewsError>;
