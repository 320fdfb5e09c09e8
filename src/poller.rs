//! The polling loop that produces news items.
//!
//! One background task walks the configured sources in order every cycle:
//! fetch the front page, parse it, hand the document to the source's
//! extraction routine, which pushes items into the delivery queue. A failed
//! fetch or an unrecognized page costs that source its turn this cycle and
//! nothing more; the loop itself has no fatal path.
//!
//! Shutdown is cooperative: the stop flag is checked once per cycle at the
//! loop head. The inter-cycle sleep is not interrupted, so observing the
//! flag can lag by up to one interval, and a fetch already in flight is
//! allowed to finish.

use crate::fetch::Fetch;
use crate::queue::ItemSink;
use crate::shutdown::ShutdownSignal;
use crate::sources::SourceDescriptor;
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Run the polling loop until `stop` is set.
///
/// Sources are fetched sequentially in configured order, so within one cycle
/// all items from source *i* are enqueued before any item from source *i+1*.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), interval_secs = interval.as_secs()))]
pub async fn run<F: Fetch>(
    sources: Vec<SourceDescriptor>,
    interval: Duration,
    fetcher: Arc<F>,
    sink: ItemSink,
    stop: ShutdownSignal,
) {
    let mut cycle = 0u64;
    loop {
        if stop.is_set() {
            break;
        }
        cycle += 1;
        poll_cycle(&sources, fetcher.as_ref(), &sink).await;
        debug!(cycle, secs = interval.as_secs(), "poll cycle complete; sleeping");
        tokio::time::sleep(interval).await;
    }
    info!(cycles = cycle, "poller stopped");
}

/// One pass over all configured sources.
async fn poll_cycle<F: Fetch>(sources: &[SourceDescriptor], fetcher: &F, sink: &ItemSink) {
    for source in sources {
        let body = match fetcher.fetch_text(&source.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(source = source.name, error = %e, "fetch failed; skipping source this cycle");
                continue;
            }
        };
        // The parsed document is confined to this block: `Html` is not Send
        // and must be gone before the next fetch suspends the task.
        let extracted = {
            let doc = Html::parse_document(&body);
            (source.extract)(&doc, sink)
        };
        if let Err(e) = extracted {
            warn!(source = source.name, error = %e, "extraction failed; skipping source this cycle");
        }
    }
}
