//! Cooperative stop signal
//!
//! Shared one-way flag that winds the worker fleet down after the first
//! non-passing assembly.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Shared stop flag, transitioning false to true at most once per run.
///
/// Workers observe it by value at the fetch boundary only; setting it never
/// preempts an assembly that is already executing.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
    notify: Notify,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Idempotent; wakes any taker blocked on the queue.
    pub fn set(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_set(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Resolves once the flag is set. Used by the queue to abort a wait.
    pub async fn observed(&self) {
        loop {
            if self.is_set() {
                return;
            }
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register before the re-check so a concurrent `set` cannot slip
            // between the check and the await.
            notified.as_mut().enable();
            if self.is_set() {
                return;
            }
            notified.await;
        }
    }
}
