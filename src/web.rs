//! HTTP routes.
//!
//! | Route         | Response                                               |
//! |---------------|--------------------------------------------------------|
//! | `GET /`       | HTML page of filtered news, or a generic failure page  |
//! | `GET /health` | `{"status":"ok"}`                                      |
//!
//! The index handler makes exactly one upstream call per request; nothing is
//! cached between requests.

use crate::news::NewsClient;
use crate::outputs::html::{FETCH_FAILED_MESSAGE, IndexPage, render_index};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsClient>,
}

impl AppState {
    pub fn new(news: NewsClient) -> Self {
        Self {
            news: Arc::new(news),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(state)
}

#[instrument(level = "info", skip_all)]
async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let lookback_days = state.news.config().lookback_days;
    let generated_at = Utc::now();

    match state.news.fetch_filtered_news().await {
        Ok(articles) => {
            info!(count = articles.len(), "Rendering news page");
            let page = IndexPage {
                articles: &articles,
                error: None,
                lookback_days,
                generated_at,
            };
            (StatusCode::OK, Html(render_index(&page)))
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch news; rendering error page");
            let page = IndexPage {
                articles: &[],
                error: Some(FETCH_FAILED_MESSAGE),
                lookback_days,
                generated_at,
            };
            (StatusCode::BAD_GATEWAY, Html(render_index(&page)))
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthRes {
    status: &'static str,
}

async fn health() -> Json<HealthRes> {
    Json(HealthRes { status: "ok" })
}
