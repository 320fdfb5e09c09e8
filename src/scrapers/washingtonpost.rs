//! Washington Post front page extraction.
//!
//! Stories live in cards inside the first `div.chain` container. Most cards
//! carry a byline holding author links and a timestamp span; cards in the
//! "latest" rail (`data-feature-name="latest-1-4-everywhere"`) put only a
//! timestamp in the byline, with no author links.

use crate::models::NewsItem;
use crate::queue::ItemSink;
use crate::scrapers::{ExtractError, element_text, non_empty};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

const SOURCE: &str = "The Washington Post";

static CHAIN: Lazy<Selector> = Lazy::new(|| Selector::parse("div.chain").unwrap());
static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("div.card").unwrap());
static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.headline span").unwrap());
static BYLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.byline").unwrap());
static AUTHOR_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static TIMESTAMP: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

/// Extract every story card from the front page into `sink`.
pub fn extract(doc: &Html, sink: &ItemSink) -> Result<(), ExtractError> {
    let chain = doc
        .select(&CHAIN)
        .next()
        .ok_or(ExtractError::MissingStructure("div.chain"))?;

    for card in chain.select(&CARD) {
        let Some(headline) = card.select(&HEADLINE).next() else {
            debug!(source = SOURCE, "card without headline; skipping");
            continue;
        };
        let title = element_text(headline);
        if title.is_empty() {
            debug!(source = SOURCE, "card with empty headline; skipping");
            continue;
        }

        let mut author = None;
        let mut published = None;

        let byline = card.select(&BYLINE).next();
        if card.value().attr("data-feature-name") == Some("latest-1-4-everywhere") {
            // Latest-rail cards show only a timestamp in the byline slot.
            if let Some(byline) = byline {
                published = non_empty(element_text(byline));
            }
        } else if let Some(byline) = byline {
            let names: Vec<String> = byline
                .select(&AUTHOR_LINK)
                .map(element_text)
                .filter(|name| !name.is_empty())
                .collect();
            if !names.is_empty() {
                author = Some(names.join(" "));
            }
            if let Some(ts) = byline.select(&TIMESTAMP).next() {
                published = non_empty(element_text(ts));
            }
        }

        sink.push(NewsItem {
            source: SOURCE.to_string(),
            title,
            author,
            published,
            summary: None,
        });
    }

    Ok(())
}
