//! Command-line interface definitions for Market News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every argument can be provided via a command-line flag or an environment
//! variable, so the server can be configured entirely from the process
//! environment (or a `.env` file loaded at startup).
//!
//! Validation beyond what `clap` checks lives in [`crate::config`].

use clap::Parser;

/// Command-line arguments for the Market News server.
///
/// # Examples
///
/// ```sh
/// # Minimal: the API key is the only required setting
/// NEWS_API_KEY=... market_news
///
/// # Wider window and a custom keyword list
/// market_news --lookback-days 3 --keywords stock,earnings --quote-keywords
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI.org API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// Interface to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Full URL of the NewsAPI `everything` endpoint
    #[arg(
        long,
        env = "NEWS_API_URL",
        default_value = "https://newsapi.org/v2/everything"
    )]
    pub news_api_url: String,

    /// How many days back the search window reaches
    #[arg(
        long,
        env = "NEWS_LOOKBACK_DAYS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=30)
    )]
    pub lookback_days: u32,

    /// Comma separated keywords used both in the query and in the relevance filter
    #[arg(short, long, env = "NEWS_KEYWORDS", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Wrap every keyword in double quotes when building the search query
    #[arg(long, env = "NEWS_QUOTE_KEYWORDS")]
    pub quote_keywords: bool,

    /// Maximum number of articles requested from the API
    #[arg(
        long,
        env = "PAGE_SIZE",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub page_size: u32,

    /// Upstream request timeout, in seconds
    #[arg(long, env = "NEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}
