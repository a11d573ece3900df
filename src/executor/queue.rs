//! Sealed concurrent work queue
//!
//! FIFO of assemblies, populated once and sealed before workers start
//! draining it.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Notify;

use super::StopSignal;
use crate::models::Assembly;

/// What a call to [`AssemblyQueue::take`] resolved to.
#[derive(Debug)]
pub enum Fetch {
    /// The next assembly; each one is delivered to exactly one taker.
    Assembly(Assembly),
    /// The queue is sealed and nothing is left.
    Drained,
    /// The stop signal fired before an assembly was taken.
    Stopped,
}

#[derive(Debug, Default)]
struct Inner {
    items: VecDeque<Assembly>,
    sealed: bool,
}

/// Concurrent FIFO with a terminal sealed state.
///
/// `enqueue` is only valid before `seal`; after sealing, `take` hands out
/// the remaining assemblies and then reports `Drained` instead of blocking.
#[derive(Debug, Default)]
pub struct AssemblyQueue {
    inner: Mutex<Inner>,
    notify: Notify,
}

impl AssemblyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add an assembly. Must not be called after [`seal`](Self::seal).
    pub fn enqueue(&self, assembly: Assembly) {
        let mut inner = self.lock();
        debug_assert!(!inner.sealed, "enqueue after seal");
        inner.items.push_back(assembly);
        drop(inner);
        self.notify.notify_one();
    }

    /// Mark that no further assemblies will arrive and wake every taker.
    pub fn seal(&self) {
        self.lock().sealed = true;
        self.notify.notify_waiters();
    }

    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the next assembly.
    ///
    /// Resolves when an assembly is available, when the queue is sealed and
    /// drained, or when `stop` fires — whichever happens first. A set stop
    /// signal wins even while assemblies remain.
    pub async fn take(&self, stop: &StopSignal) -> Fetch {
        loop {
            if stop.is_set() {
                return Fetch::Stopped;
            }

            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register interest before inspecting the queue so an enqueue or
            // seal between the check and the await still wakes us.
            notified.as_mut().enable();

            {
                let mut inner = self.lock();
                if let Some(assembly) = inner.items.pop_front() {
                    return Fetch::Assembly(assembly);
                }
                if inner.sealed {
                    return Fetch::Drained;
                }
            }

            tokio::select! {
                _ = notified => {}
                _ = stop.observed() => {}
            }
        }
    }
}
