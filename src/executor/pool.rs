//! Worker pool
//!
//! Spawns a fixed number of workers over a sealed queue and reduces their
//! terminal statuses into one overall status.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use tracing::error;

use super::worker::{RunContext, Worker};
use super::{AssemblyQueue, StopSignal};
use crate::engine::TestEngine;
use crate::models::{Assembly, RunStatus, RunSummary};
use crate::output::ReportSink;
use crate::session::SessionReporter;

/// Fixed-size pool of concurrent workers.
///
/// The pool seeds the queue with every assembly up front, seals it, starts
/// all workers together, and completes only once every worker has
/// terminated. The first non-passing assembly stops further dequeuing;
/// assemblies already executing on sibling workers run to completion and
/// their results still count.
pub struct WorkerPool {
    workers: usize,
    engine: Arc<dyn TestEngine>,
    sink: Arc<ReportSink>,
}

impl WorkerPool {
    /// `workers` must be at least 1; the caller validates user input.
    pub fn new(workers: usize, engine: Arc<dyn TestEngine>, sink: Arc<ReportSink>) -> Self {
        Self {
            workers,
            engine,
            sink,
        }
    }

    /// Run every assembly and reduce the outcome.
    pub async fn run(
        &self,
        assemblies: Vec<Assembly>,
        reporter: &dyn SessionReporter,
    ) -> RunSummary {
        let started_at = Utc::now();
        let start = Instant::now();
        let total = assemblies.len();

        let queue = AssemblyQueue::new();
        for assembly in assemblies {
            queue.enqueue(assembly);
        }
        queue.seal();

        reporter.on_run_start(total, self.workers);

        let ctx = Arc::new(RunContext {
            queue,
            stop: StopSignal::new(),
            sink: self.sink.clone(),
            engine: self.engine.clone(),
        });

        let handles: Vec<_> = (0..self.workers)
            .map(|id| tokio::spawn(Worker::new(id, ctx.clone()).run()))
            .collect();

        let mut terminals = Vec::with_capacity(self.workers);
        let mut records = Vec::with_capacity(total);
        for exit in join_all(handles).await {
            match exit {
                Ok(exit) => {
                    terminals.push(exit.terminal);
                    records.extend(exit.records);
                }
                Err(e) => {
                    error!("worker task failed: {e}");
                    terminals.push(RunStatus::Error);
                }
            }
        }
        let overall = RunStatus::reduce(terminals);

        let summary = RunSummary::new(
            started_at,
            overall,
            start.elapsed().as_millis() as u64,
            records,
        );
        reporter.on_run_end(&summary);
        summary
    }
}
