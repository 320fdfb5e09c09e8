//! The delivery queue between the poller and the reporter.
//!
//! A thin wrapper over `tokio::sync::mpsc::unbounded_channel`: sends never
//! block the poller, the reporter blocks on `recv()` until an item arrives,
//! and items come out in exactly the order they went in. The channel is
//! multi-producer by construction, so the sink side stays safe even if
//! per-source fetches are ever fanned out across tasks.

use crate::models::NewsItem;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

/// Producing handle to the delivery queue.
///
/// Extraction routines push each discovered item here as they parse, rather
/// than returning a collection, so items can reach the reporter
/// incrementally, mid-document.
#[derive(Clone, Debug)]
pub struct ItemSink {
    tx: mpsc::UnboundedSender<NewsItem>,
}

impl ItemSink {
    /// Enqueue one item. Never blocks.
    ///
    /// A send can only fail once the receiver has been dropped, which means
    /// the process is already tearing down; the item is logged and let go.
    pub fn push(&self, item: NewsItem) {
        if let Err(e) = self.tx.send(item) {
            debug!(title = %e.0.title, "reporter gone; dropping item");
        }
    }
}

/// Create the delivery queue, returning the poller-side sink and the
/// reporter-side receiver.
pub fn delivery_queue() -> (ItemSink, UnboundedReceiver<NewsItem>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ItemSink { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            source: "Test".to_string(),
            title: title.to_string(),
            author: None,
            published: None,
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_fifo_order_preserved() {
        let (sink, mut rx) = delivery_queue();
        sink.push(item("first"));
        sink.push(item("second"));
        sink.push(item("third"));

        assert_eq!(rx.recv().await.unwrap().title, "first");
        assert_eq!(rx.recv().await.unwrap().title, "second");
        assert_eq!(rx.recv().await.unwrap().title, "third");
    }

    #[tokio::test]
    async fn test_no_items_lost_across_producers() {
        let (sink, mut rx) = delivery_queue();
        let producers = 4;
        let per_producer = 250;

        let mut handles = Vec::new();
        for p in 0..producers {
            let sink = sink.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..per_producer {
                    sink.push(item(&format!("p{p}-{i}")));
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        drop(sink);

        let mut received = 0;
        while rx.recv().await.is_some() {
            received += 1;
        }
        assert_eq!(received, producers * per_producer);
    }

    #[tokio::test]
    async fn test_push_after_receiver_dropped_does_not_panic() {
        let (sink, rx) = delivery_queue();
        drop(rx);
        sink.push(item("nobody home"));
    }
}
