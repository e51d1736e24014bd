//! NewsAPI fetch-and-filter service.
//!
//! One call to [`NewsClient::fetch_filtered_news`] issues a single
//! `GET /v2/everything` request covering the configured lookback window, then
//! keeps only the articles whose title or description mentions one of the
//! configured keywords.
//!
//! # Parsing policy
//!
//! The upstream JSON is read as an untyped [`serde_json::Value`] so that a
//! single odd article never fails the batch:
//!
//! | Payload shape                          | Result                    |
//! |----------------------------------------|---------------------------|
//! | top level is not an object             | [`NewsError::MalformedPayload`] |
//! | `"status": "error"`                    | [`NewsError::Upstream`]   |
//! | `articles` missing or `null`           | empty list                |
//! | `articles` is not an array             | [`NewsError::MalformedPayload`] |
//! | an article is not an object            | skipped                   |
//! | a field is missing or not a string     | treated as absent         |
//!
//! Matching is a plain lowercase substring test: no stemming and no word
//! boundaries, so `market` also matches `marketing`.

use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::models::{ArticleSummary, DateLabel};
use crate::utils::truncate_for_log;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Timestamp layout used for the `from`/`to` parameters and for `publishedAt`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

type JsonObject = Map<String, Value>;

/// Client for the NewsAPI `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    config: NewsConfig,
}

impl NewsClient {
    /// Build a client whose every request is bounded by `config.timeout`.
    pub fn new(config: NewsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Query parameters for a search window ending at `now`.
    pub fn query_params(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let from = window_start(now, self.config.lookback_days);
        vec![
            ("q", build_query(&self.config.keywords, self.config.quote_keywords)),
            ("from", format_timestamp(from)),
            ("to", format_timestamp(now)),
            ("sortBy", "publishedAt".to_string()),
            ("language", "en".to_string()),
            ("apiKey", self.config.api_key.clone()),
            ("pageSize", self.config.page_size.to_string()),
        ]
    }

    /// Fetch the current window and return the matching articles in upstream
    /// order (newest first, as requested via `sortBy`).
    ///
    /// # Errors
    ///
    /// - [`NewsError::Http`] on connect failures and timeouts
    /// - [`NewsError::Status`] on a non-2xx response
    /// - [`NewsError::Decode`] if the body is not JSON
    /// - [`NewsError::Upstream`] / [`NewsError::MalformedPayload`] per the
    ///   parsing policy in the module docs
    #[instrument(level = "info", skip_all, fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_filtered_news(&self) -> Result<Vec<ArticleSummary>> {
        let t0 = Instant::now();
        let now = Utc::now();

        // Errors carry the request URL, which includes the API key.
        let response = self
            .http
            .get(self.config.endpoint.clone())
            .query(&self.query_params(now))
            .send()
            .await
            .map_err(|e| NewsError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NewsError::Http(e.without_url()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received news API response");

        if !status.is_success() {
            let message =
                upstream_message(&body).unwrap_or_else(|| truncate_for_log(body.trim(), 200));
            warn!(status = status.as_u16(), %message, "News API returned an error status");
            return Err(NewsError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = serde_json::from_str(&body)?;
        let summaries = filter_articles(&payload, &self.config.keywords, now)?;

        info!(
            count = summaries.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched filtered news"
        );
        Ok(summaries)
    }
}

/// Keep the articles of a search response that mention any keyword.
///
/// `now` is only used to label recently published articles.
pub fn filter_articles(
    payload: &Value,
    keywords: &[String],
    now: DateTime<Utc>,
) -> Result<Vec<ArticleSummary>> {
    let root = payload.as_object().ok_or_else(|| {
        NewsError::MalformedPayload(format!(
            "expected a JSON object at the top level, got {}",
            json_kind(payload)
        ))
    })?;

    if text_field(root, "status") == Some("error") {
        return Err(NewsError::Upstream {
            code: text_field(root, "code").unwrap_or("unknown").to_string(),
            message: text_field(root, "message").unwrap_or("no message").to_string(),
        });
    }

    let articles = match root.get("articles") {
        None | Some(Value::Null) => {
            debug!("Response has no articles field");
            return Ok(Vec::new());
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(NewsError::MalformedPayload(format!(
                "`articles` should be an array, got {}",
                json_kind(other)
            )));
        }
    };

    let mut summaries = Vec::new();
    let mut skipped = 0usize;
    for (index, item) in articles.iter().enumerate() {
        let Some(article) = item.as_object() else {
            skipped += 1;
            debug!(index, kind = json_kind(item), "Skipping article that is not an object");
            continue;
        };
        if matches_keywords(&article_text(article), keywords) {
            summaries.push(summarize(article, now));
        }
    }

    debug!(
        total = articles.len(),
        matched = summaries.len(),
        skipped,
        "Filtered articles"
    );
    Ok(summaries)
}

/// Join keywords with ` OR `, optionally quoting each one.
pub fn build_query(keywords: &[String], quote: bool) -> String {
    keywords
        .iter()
        .map(|kw| if quote { format!("\"{kw}\"") } else { kw.clone() })
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Start of the search window.
pub fn window_start(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(lookback_days))
}

pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Lowercased title and description joined by a space. Missing or
/// non-string fields contribute nothing.
pub fn article_text(article: &JsonObject) -> String {
    ["title", "description"]
        .iter()
        .filter_map(|key| text_field(article, key))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive substring test of `text` against every keyword.
pub fn matches_keywords(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| !kw.is_empty())
        .any(|kw| text.contains(&kw.to_lowercase()))
}

/// `source.name`, or `None` when the source is missing, not an object, or
/// has no string name.
pub fn extract_source_name(source: Option<&Value>) -> Option<String> {
    source?
        .as_object()?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn summarize(article: &JsonObject, now: DateTime<Utc>) -> ArticleSummary {
    let owned = |key: &str| text_field(article, key).map(str::to_string);
    ArticleSummary {
        title: owned("title"),
        date: owned("publishedAt"),
        source: extract_source_name(article.get("source")),
        description: owned("description"),
        url: owned("url"),
        date_label: date_label(article, now),
    }
}

/// Later rules win: `lastModified` beats a recent `publishedAt`, which beats
/// `updatedAt`.
fn date_label(article: &JsonObject, now: DateTime<Utc>) -> DateLabel {
    let mut label = DateLabel::Published;
    if article.contains_key("updatedAt") {
        label = DateLabel::Updated;
    }
    let published = text_field(article, "publishedAt")
        .and_then(|s| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok())
        .map(|naive| naive.and_utc());
    if let Some(published) = published {
        if (now - published).num_days() < 1 {
            label = DateLabel::RecentlyPublished;
        }
    }
    if article.contains_key("lastModified") {
        label = DateLabel::LastUpdated;
    }
    label
}

fn text_field<'a>(object: &'a JsonObject, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Pull `message` out of a NewsAPI error body.
fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
