//! HTML rendering for the news page.
//!
//! The page is assembled with `std::fmt::Write` into a single `String`.
//! Every piece of upstream text passes through [`escape_html`]; links are
//! only emitted for `http(s)` URLs.

use crate::models::ArticleSummary;
use crate::utils::{escape_html, is_web_url};
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

/// Shown in place of a missing title.
pub const TITLE_PLACEHOLDER: &str = "No Title Available";

/// Shown when the fetch failed. Details go to the log, not the reader.
pub const FETCH_FAILED_MESSAGE: &str =
    "Unable to fetch market news right now. Please try again later.";

/// Everything the index page shows.
#[derive(Debug)]
pub struct IndexPage<'a> {
    pub articles: &'a [ArticleSummary],
    pub error: Option<&'a str>,
    pub lookback_days: u32,
    pub generated_at: DateTime<Utc>,
}

pub fn render_index(page: &IndexPage<'_>) -> String {
    let mut html = String::with_capacity(4096);
    match write_index(&mut html, page) {
        Ok(()) => html,
        Err(_) => String::new(),
    }
}

fn write_index(out: &mut String, page: &IndexPage<'_>) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>Stock Market News</title>")?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<header>")?;
    writeln!(out, "<h1>Stock &amp; Share Market News</h1>")?;
    writeln!(
        out,
        "<p class=\"meta\">Headlines from the last {} | updated {}</p>",
        window_text(page.lookback_days),
        page.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "</header>")?;
    writeln!(out, "<main>")?;

    if let Some(error) = page.error {
        writeln!(out, "<p class=\"error\">{}</p>", escape_html(error))?;
    } else if page.articles.is_empty() {
        writeln!(
            out,
            "<p class=\"empty\">No matching news in the last {}.</p>",
            window_text(page.lookback_days)
        )?;
    } else {
        writeln!(out, "<ul class=\"articles\">")?;
        for article in page.articles {
            write_article(out, article)?;
        }
        writeln!(out, "</ul>")?;
    }

    writeln!(out, "</main>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_article(out: &mut String, article: &ArticleSummary) -> fmt::Result {
    let title = escape_html(article.title.as_deref().unwrap_or(TITLE_PLACEHOLDER));

    writeln!(out, "<li class=\"article\">")?;
    match article.url.as_deref().filter(|u| is_web_url(u)) {
        Some(url) => writeln!(
            out,
            "<h2><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a></h2>",
            escape_html(url)
        )?,
        None => writeln!(out, "<h2>{title}</h2>")?,
    }

    write!(out, "<p class=\"meta\">")?;
    if let Some(source) = &article.source {
        write!(out, "<span class=\"source\">{}</span>", escape_html(source))?;
    }
    if let Some(date) = &article.date {
        if article.source.is_some() {
            write!(out, " | ")?;
        }
        write!(
            out,
            "<span class=\"date\">{}: {}</span>",
            article.date_label,
            escape_html(date)
        )?;
    }
    writeln!(out, "</p>")?;

    if let Some(description) = &article.description {
        writeln!(out, "<p>{}</p>", escape_html(description))?;
    }
    writeln!(out, "</li>")
}

fn window_text(days: u32) -> String {
    if days == 1 {
        "24 hours".to_string()
    } else {
        format!("{days} days")
    }
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:52rem;margin:0 auto;padding:1rem;color:#222}\
h1{margin-bottom:.25rem}\
.meta{color:#666;font-size:.9rem}\
.articles{list-style:none;padding:0}\
.article{border-bottom:1px solid #ddd;padding:.75rem 0}\
.article h2{font-size:1.1rem;margin:0 0 .25rem}\
.error{color:#a00}";
