//! Worker loop
//!
//! One worker repeatedly takes an assembly, executes it through the engine,
//! flushes its buffered report, and decides whether to keep fetching.

use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::{AssemblyQueue, Fetch, StopSignal};
use crate::engine::{ReportBuffer, ReportListener, TestEngine};
use crate::models::{Assembly, AssemblyRecord, RunStatus};
use crate::output::ReportSink;

/// Shared state handed to every worker in the pool.
///
/// The queue and the stop signal are the only mutable state shared across
/// workers; the sink is touched only during a flush.
pub(crate) struct RunContext {
    pub queue: AssemblyQueue,
    pub stop: StopSignal,
    pub sink: Arc<ReportSink>,
    pub engine: Arc<dyn TestEngine>,
}

/// Terminal state of one worker: its status and the records it produced.
///
/// A worker that terminated on a drained queue or an observed stop without
/// a non-passing assembly of its own reports `Pass`, the reduction identity.
pub(crate) struct WorkerExit {
    pub terminal: RunStatus,
    pub records: Vec<AssemblyRecord>,
}

pub(crate) struct Worker {
    id: usize,
    ctx: Arc<RunContext>,
}

impl Worker {
    pub fn new(id: usize, ctx: Arc<RunContext>) -> Self {
        Self { id, ctx }
    }

    /// Drain the queue until it is empty, the stop signal fires, or an
    /// assembly comes back non-passing.
    pub async fn run(self) -> WorkerExit {
        let mut records = Vec::new();

        loop {
            let assembly = match self.ctx.queue.take(&self.ctx.stop).await {
                Fetch::Assembly(assembly) => assembly,
                Fetch::Drained => {
                    debug!("worker {} done: queue drained", self.id);
                    return WorkerExit {
                        terminal: RunStatus::Pass,
                        records,
                    };
                }
                Fetch::Stopped => {
                    debug!("worker {} done: stop observed", self.id);
                    return WorkerExit {
                        terminal: RunStatus::Pass,
                        records,
                    };
                }
            };

            let record = self.execute(assembly).await;
            let status = record.status;
            records.push(record);

            if !status.is_pass() {
                self.ctx.stop.set();
                debug!("worker {} stopping the pool: {}", self.id, status);
                return WorkerExit {
                    terminal: status,
                    records,
                };
            }
        }
    }

    /// Run one assembly, flush its report, and classify the outcome.
    async fn execute(&self, assembly: Assembly) -> AssemblyRecord {
        debug!("worker {} executing {}", self.id, assembly);

        let start = Instant::now();
        let mut buffer = ReportBuffer::new();
        let outcome = self.ctx.engine.run_assembly(&assembly, &mut buffer).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let record = match outcome {
            Ok(()) if buffer.failure_occurred() => {
                AssemblyRecord::new(&assembly, RunStatus::Fail, duration_ms)
            }
            Ok(()) => AssemblyRecord::new(&assembly, RunStatus::Pass, duration_ms),
            Err(e) => {
                buffer.report(&format!("{e}\n"));
                AssemblyRecord::new(&assembly, RunStatus::Error, duration_ms)
                    .with_message(e.to_string())
            }
        };

        self.ctx.sink.flush_report(buffer.as_bytes());
        debug!("worker {} finished {}: {}", self.id, record.assembly, record.status);
        record
    }
}
