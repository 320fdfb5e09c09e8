//! Fox News world section extraction.
//!
//! Stories are `article.article` entries inside the collection list section.
//! Each carries an `h4.title` headline and a meta block whose `span.time`
//! holds the relative timestamp. No author or teaser appears in this layout.

use crate::models::NewsItem;
use crate::queue::ItemSink;
use crate::scrapers::{ExtractError, element_text, non_empty};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

const SOURCE: &str = "Fox News";

static COLLECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("section.collection-article-list").unwrap());
static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article.article").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h4.title").unwrap());
static META_TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("div.meta span.time").unwrap());

/// Extract every article entry from the collection list into `sink`.
pub fn extract(doc: &Html, sink: &ItemSink) -> Result<(), ExtractError> {
    let collection = doc
        .select(&COLLECTION)
        .next()
        .ok_or(ExtractError::MissingStructure("section.collection-article-list"))?;

    for article in collection.select(&ARTICLE) {
        let Some(title_el) = article.select(&TITLE).next() else {
            debug!(source = SOURCE, "article without title; skipping");
            continue;
        };
        let title = element_text(title_el);
        if title.is_empty() {
            debug!(source = SOURCE, "article with empty title; skipping");
            continue;
        }

        let published = article
            .select(&META_TIME)
            .next()
            .and_then(|el| non_empty(element_text(el)));

        sink.push(NewsItem {
            source: SOURCE.to_string(),
            title,
            author: None,
            published,
            summary: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::delivery_queue;

    const WORLD_PAGE: &str = r#"
        <html><body>
          <section class="collection-article-list">
            <article class="article">
              <h4 class="title">Leaders meet for summit</h4>
              <div class="meta"><span class="time">14 mins ago</span></div>
            </article>
            <article class="article">
              <h4 class="title">Volcano erupts overnight</h4>
              <div class="meta"></div>
            </article>
          </section>
        </body></html>"#;

    fn extract_all(html: &str) -> Result<Vec<NewsItem>, ExtractError> {
        let doc = Html::parse_document(html);
        let (sink, mut rx) = delivery_queue();
        extract(&doc, &sink)?;
        drop(sink);
        let mut items = Vec::new();
        while let Ok(item) = rx.try_recv() {
            items.push(item);
        }
        Ok(items)
    }

    #[test]
    fn test_extracts_articles_with_timestamp() {
        let items = extract_all(WORLD_PAGE).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source, SOURCE);
        assert_eq!(items[0].title, "Leaders meet for summit");
        assert_eq!(items[0].published.as_deref(), Some("14 mins ago"));
        assert_eq!(items[0].author, None);
        assert_eq!(items[0].summary, None);
    }

    #[test]
    fn test_article_without_time_keeps_date_absent() {
        let items = extract_all(WORLD_PAGE).unwrap();
        assert_eq!(items[1].title, "Volcano erupts overnight");
        assert_eq!(items[1].published, None);
    }

    #[test]
    fn test_missing_collection_is_a_structure_error() {
        let err = extract_all("<html><body></body></html>").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingStructure("section.collection-article-list")
        ));
    }
}
