//! Cooperative shutdown for the polling task.
//!
//! The main task owns both halves of the protocol: it sets the
//! [`ShutdownSignal`] when the operator interrupts the process, then waits on
//! [`await_stop`] for the poller to observe the flag and finish. The wait is
//! bounded: a poller that fails to stop inside the bound surfaces as an
//! error instead of hanging the process forever, and a poller that panicked
//! is detected through its join handle rather than waited on indefinitely.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

/// Shared stop flag, set at most once and read by the poller at its
/// loop-head checkpoint.
///
/// Cloning hands out another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the poller to stop. Idempotent; calling again has no effect.
    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            info!("shutdown signaled");
        }
    }

    /// Poller-side checkpoint.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Failure modes of the bounded join in [`await_stop`].
#[derive(Debug, Error)]
pub enum StopError {
    /// The poller did not exit within the bound, e.g. a hung network call
    /// delaying the loop-head checkpoint.
    #[error("poller did not stop within {0:?}")]
    Timeout(Duration),
    /// The poller task terminated abnormally before or during shutdown.
    #[error("poller task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Wait for the poller task to finish, bounded by `bound`.
///
/// The bound should cover one full fetch cycle plus one interval: once
/// signaled, the poller completes any in-flight cycle, sleeps out its
/// current interval, and exits at the next loop-head checkpoint.
pub async fn await_stop(handle: JoinHandle<()>, bound: Duration) -> Result<(), StopError> {
    match tokio::time::timeout(bound, handle).await {
        Ok(join_result) => {
            join_result?;
            Ok(())
        }
        Err(_) => Err(StopError::Timeout(bound)),
    }
}
