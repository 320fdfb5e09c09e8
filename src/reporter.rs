//! The consuming loop that reports newly seen items.
//!
//! Pulls items off the delivery queue in arrival order, discards anything
//! whose title has been reported before, and hands everything else to the
//! emit callback before recording it in the cache. Every dequeued item goes
//! through the dedup check; nothing is dropped ahead of it.
//!
//! The loop has no stop flag of its own: in production it is abandoned when
//! the operator interrupt wins the select in `main`, and it returns on its
//! own only if the queue closes (all producers gone).

use crate::models::{DedupCache, NewsItem};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::trace;

/// Consume `queue` until it closes, emitting each first-seen item.
pub async fn run(
    queue: &mut UnboundedReceiver<NewsItem>,
    cache: &mut DedupCache,
    mut emit: impl FnMut(&NewsItem),
) {
    while let Some(item) = queue.recv().await {
        if cache.contains(&item) {
            trace!(title = %item.title, "duplicate item; discarding");
            continue;
        }
        emit(&item);
        cache.insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::delivery_queue;

    fn item(source: &str, title: &str) -> NewsItem {
        NewsItem {
            source: source.to_string(),
            title: title.to_string(),
            author: None,
            published: None,
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_same_title_twice_emits_once() {
        let (sink, mut rx) = delivery_queue();
        sink.push(item("ABC News", "Markets rally"));
        sink.push(item("ABC News", "Markets rally"));
        drop(sink);

        let mut cache = DedupCache::new();
        let mut emitted = Vec::new();
        run(&mut rx, &mut cache, |i| emitted.push(i.title.clone())).await;

        assert_eq!(emitted, ["Markets rally"]);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_same_title_from_different_sources_is_a_duplicate() {
        let (sink, mut rx) = delivery_queue();
        sink.push(item("ABC News", "Markets rally"));
        sink.push(item("Fox News", "Markets rally"));
        drop(sink);

        let mut cache = DedupCache::new();
        let mut emitted = Vec::new();
        run(&mut rx, &mut cache, |i| emitted.push(i.source.clone())).await;

        // Title identity wins: the second sighting is discarded even though
        // it came from another outlet.
        assert_eq!(emitted, ["ABC News"]);
    }

    #[tokio::test]
    async fn test_emission_preserves_arrival_order() {
        let (sink, mut rx) = delivery_queue();
        for title in ["one", "two", "three"] {
            sink.push(item("Test", title));
        }
        drop(sink);

        let mut cache = DedupCache::new();
        let mut emitted = Vec::new();
        run(&mut rx, &mut cache, |i| emitted.push(i.title.clone())).await;

        assert_eq!(emitted, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_every_enqueued_item_is_accounted_for() {
        let (sink, mut rx) = delivery_queue();
        let titles = ["a", "b", "a", "c", "b"];
        for title in titles {
            sink.push(item("Test", title));
        }
        drop(sink);

        let mut cache = DedupCache::new();
        let mut emitted = 0usize;
        // `run` returns only once the queue is fully drained and closed, so
        // finishing at all means every item reached the dedup check.
        run(&mut rx, &mut cache, |_| emitted += 1).await;

        assert_eq!(emitted, 3);
        assert_eq!(cache.len(), 3);
        assert_eq!(emitted + (titles.len() - cache.len()), titles.len());
    }

    #[tokio::test]
    async fn test_emitted_item_keeps_its_fields() {
        let (sink, mut rx) = delivery_queue();
        sink.push(NewsItem {
            source: "ABC News".to_string(),
            title: "Quake shakes island chain".to_string(),
            author: None,
            published: Some("3 hours ago".to_string()),
            summary: Some("A strong quake struck offshore.".to_string()),
        });
        drop(sink);

        let mut cache = DedupCache::new();
        let mut seen = Vec::new();
        run(&mut rx, &mut cache, |i| seen.push(i.clone())).await;

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].published.as_deref(), Some("3 hours ago"));
        assert_eq!(seen[0].summary.as_deref(), Some("A strong quake struck offshore."));
    }
}
