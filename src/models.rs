//! Data models for filtered news.
//!
//! - [`ArticleSummary`]: one matching article, flattened from the NewsAPI shape
//! - [`DateLabel`]: how the article's date should be described to readers
//!
//! Summaries are built fresh on every request and dropped after rendering.

use serde::Serialize;
use std::fmt;

/// A news article that matched the keyword filter.
///
/// Every field is optional because NewsAPI frequently omits or nulls them.
/// `date` is the literal `publishedAt` text, passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub title: Option<String>,
    pub date: Option<String>,
    /// `source.name` from the upstream article.
    pub source: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub date_label: DateLabel,
}

/// Label shown next to an article's date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DateLabel {
    #[default]
    #[serde(rename = "Publish Date")]
    Published,
    #[serde(rename = "Recently Published Date")]
    RecentlyPublished,
    #[serde(rename = "Update Date")]
    Updated,
    #[serde(rename = "Last Updated Date")]
    LastUpdated,
}

impl DateLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateLabel::Published => "Publish Date",
            DateLabel::RecentlyPublished => "Recently Published Date",
            DateLabel::Updated => "Update Date",
            DateLabel::LastUpdated => "Last Updated Date",
        }
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
