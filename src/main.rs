//! # Market News
//!
//! A small web server that shows recent stock and share-market headlines.
//! Each page load queries the NewsAPI `everything` endpoint for the last
//! day (configurable), keeps the articles whose title or description
//! mentions a market keyword, and renders them as HTML.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... market_news --port 5000
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: flags/env (and `.env`) are parsed by [`cli`] and
//!    validated by [`config`]; a missing API key stops startup
//! 2. **Fetching**: [`news`] issues one bounded request and filters the
//!    response defensively
//! 3. **Output**: [`web`] serves `/` and `/health`, rendering through
//!    [`outputs::html`]

use clap::Parser;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod news;
mod outputs;
mod utils;
mod web;

use cli::Cli;
use config::AppConfig;
use news::NewsClient;
use web::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // A missing .env is normal; real environment variables take precedence.
    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "Loaded .env file");
    }

    let args = Cli::parse();
    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration; refusing to start");
            return Err(e.into());
        }
    };

    info!(
        keywords = ?config.news.keywords,
        lookback_days = config.news.lookback_days,
        page_size = config.news.page_size,
        timeout_secs = config.news.timeout.as_secs(),
        "News service configured"
    );

    let state = AppState::new(NewsClient::new(config.news)?);
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Market News listening");
    axum::serve(listener, app).await?;

    Ok(())
}
