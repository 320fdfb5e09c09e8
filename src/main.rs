//! # Headline Watch
//!
//! A long-running watcher that polls the front pages of a fixed set of news
//! outlets and streams newly published headlines to the terminal, reporting
//! each distinct title exactly once per run.
//!
//! ## Usage
//!
//! ```sh
//! headline_watch --interval 60
//! ```
//!
//! Stop with Ctrl-C; the poller is asked to stop and joined before exit.
//!
//! ## Architecture
//!
//! Two cooperating loops connected by an unbounded FIFO queue:
//! 1. **Poller** (background task): every cycle, fetch each source's front
//!    page and run its extraction routine, which pushes items to the queue
//! 2. **Reporter** (main task): receive items in arrival order, discard
//!    already-seen titles, print the rest
//!
//! Shutdown is cooperative: Ctrl-C sets a shared stop flag that the poller
//! checks at the head of each cycle, then the main task waits for the poller
//! to finish, bounded by one fetch cycle plus one interval.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod fetch;
mod models;
mod outputs;
mod poller;
mod queue;
mod reporter;
mod scrapers;
mod shutdown;
mod sources;

use cli::Cli;
use fetch::HttpFetcher;
use models::DedupCache;
use outputs::Format;
use shutdown::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    let format = if args.json { Format::JsonLines } else { Format::Console };
    let interval = Duration::from_secs(args.interval);

    let sources = sources::default_sources();
    let fetcher = Arc::new(HttpFetcher::new()?);
    let (sink, mut deliveries) = queue::delivery_queue();
    let stop = ShutdownSignal::new();

    info!(
        sources = sources.len(),
        interval_secs = args.interval,
        "headline watch starting up; press Ctrl-C to stop"
    );

    // Once signaled, the poller finishes any in-flight cycle and sleeps out
    // its interval before it can observe the flag.
    let stop_bound =
        interval + Duration::from_secs(fetch::REQUEST_TIMEOUT_SECS * sources.len() as u64);

    let poller = tokio::spawn(poller::run(
        sources,
        interval,
        fetcher,
        sink,
        stop.clone(),
    ));

    // The dedup cache lives on this task only; the poller never sees it.
    let mut cache = DedupCache::new();
    tokio::select! {
        _ = reporter::run(&mut deliveries, &mut cache, |item| outputs::emit(item, format)) => {
            // The queue only closes if the poller died and dropped the sink.
            warn!("delivery queue closed; poller is gone");
        }
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "failed to listen for interrupt");
            }
            info!("interrupt received; stopping poller, please wait");
        }
    }

    stop.signal();
    match shutdown::await_stop(poller, stop_bound).await {
        Ok(()) => info!(reported = cache.len(), "poller stopped; shutting down"),
        Err(e) => error!(error = %e, "poller did not stop cleanly"),
    }

    Ok(())
}
