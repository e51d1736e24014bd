//! Validated runtime configuration.
//!
//! [`Cli`] holds whatever the user typed (or exported); [`AppConfig`] is what
//! the rest of the program runs on. The conversion is the single place where
//! startup can fail, so a bad value stops the process before it binds a port.

use crate::cli::Cli;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Keywords used when none are configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "stock",
    "stocks",
    "share market",
    "sensex",
    "nifty",
    "market",
    "earnings",
    "quarter results",
];

/// Settings for the fetch-and-filter service.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// NewsAPI key, sent as the `apiKey` query parameter.
    pub api_key: String,
    /// The `everything` endpoint.
    pub endpoint: Url,
    /// Lowercased, non-empty keywords.
    pub keywords: Vec<String>,
    /// Quote each keyword in the search query.
    pub quote_keywords: bool,
    /// Days between the start of the search window and now.
    pub lookback_days: u32,
    /// `pageSize` query parameter.
    pub page_size: u32,
    /// Bound on the whole upstream request.
    pub timeout: Duration,
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub news: NewsConfig,
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    #[instrument(level = "debug", skip_all)]
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let api_key = resolve_api_key(cli.news_api_key)?;
        let endpoint = parse_endpoint(&cli.news_api_url)?;

        let addr = format!("{}:{}", cli.host, cli.port);
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddress { addr, source })?;

        let keywords = normalize_keywords(cli.keywords);
        debug!(?keywords, %listen_addr, "Resolved configuration");

        Ok(Self {
            listen_addr,
            news: NewsConfig {
                api_key,
                endpoint,
                keywords,
                quote_keywords: cli.quote_keywords,
                lookback_days: cli.lookback_days,
                page_size: cli.page_size,
                timeout: Duration::from_secs(cli.timeout_secs),
            },
        })
    }
}

/// Require a non-blank API key.
pub fn resolve_api_key(raw: Option<String>) -> Result<String, ConfigError> {
    match raw.map(|k| k.trim().to_string()) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey { var: API_KEY_VAR }),
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// Trim and lowercase keywords, dropping blanks. Falls back to
/// [`DEFAULT_KEYWORDS`] when nothing is left.
pub fn normalize_keywords(raw: Vec<String>) -> Vec<String> {
    let mut keywords: Vec<String> = raw
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        keywords = DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }
    keywords
}
