//! ABC News international section extraction.
//!
//! Stories are `section.ContentRoll__Item` blocks; each holds a headline
//! container with the linked title and an optional teaser paragraph, plus a
//! timestamp block alongside. A page with no content-roll items yields zero
//! stories rather than an error, matching how the section renders when empty.

use crate::models::NewsItem;
use crate::queue::ItemSink;
use crate::scrapers::{ExtractError, element_text, non_empty};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

const SOURCE: &str = "ABC News";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("section.ContentRoll__Item").unwrap());
static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.ContentRoll__Headline").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static DESC: Lazy<Selector> = Lazy::new(|| Selector::parse("div.ContentRoll__Desc").unwrap());
static TIMESTAMP: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.ContentRoll__TimeStamp").unwrap());

/// Extract every content-roll story into `sink`.
pub fn extract(doc: &Html, sink: &ItemSink) -> Result<(), ExtractError> {
    for item in doc.select(&ITEM) {
        let Some(headline) = item.select(&HEADLINE).next() else {
            debug!(source = SOURCE, "item without headline block; skipping");
            continue;
        };
        let Some(link) = headline.select(&TITLE_LINK).next() else {
            debug!(source = SOURCE, "headline without link; skipping");
            continue;
        };
        let title = element_text(link);
        if title.is_empty() {
            debug!(source = SOURCE, "item with empty title; skipping");
            continue;
        }

        let summary = headline
            .select(&DESC)
            .next()
            .and_then(|el| non_empty(element_text(el)));
        let published = item
            .select(&TIMESTAMP)
            .next()
            .and_then(|el| non_empty(element_text(el)));

        sink.push(NewsItem {
            source: SOURCE.to_string(),
            title,
            author: None,
            published,
            summary,
        });
    }

    Ok(())
}
