//! Source-specific extraction routines for news front pages.
//!
//! Each submodule knows the markup of one outlet's front page and exports a
//! single `extract` function that walks a parsed document and pushes every
//! story it finds into the delivery queue.
//!
//! # Supported Sources
//!
//! | Source | Module | Optional fields found |
//! |--------|--------|-----------------------|
//! | The Washington Post | [`washingtonpost`] | author, date |
//! | ABC News | [`abcnews`] | summary, date |
//! | Fox News | [`foxnews`] | date |
//!
//! # Common Patterns
//!
//! Extraction routines:
//! - push items directly to the [`ItemSink`](crate::queue::ItemSink) as they
//!   parse, never return collections
//! - tolerate absent optional fields (author/date/summary stay `None`)
//! - skip individual cards with no headline rather than failing the page
//! - return [`ExtractError`] only when the expected page structure is gone
//!   entirely, which the poller isolates to that source and cycle

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use thiserror::Error;

pub mod abcnews;
pub mod foxnews;
pub mod washingtonpost;

/// Signature shared by all extraction routines.
pub type Extractor =
    fn(&scraper::Html, &crate::queue::ItemSink) -> Result<(), ExtractError>;

/// The page no longer matches the markup this routine was written against.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page structure not recognized: missing {0}")]
    MissingStructure(&'static str),
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collect an element's text with whitespace collapsed and trimmed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    let raw = el.text().collect::<Vec<_>>().join(" ");
    WHITESPACE.replace_all(&raw, " ").trim().to_string()
}

/// Turn scraped text into an optional field: empty means absent.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
