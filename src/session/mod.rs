//! Session lifecycle reporting
//!
//! Hooks that bracket a whole run, independent of per-assembly report
//! buffering.

use tracing::info;

use crate::models::RunSummary;

/// Start/end notifications for one run.
///
/// `on_run_start` fires before any worker starts; `on_run_end` fires after
/// every worker has terminated and all buffered reports are flushed. Both
/// are invoked from a single call site, so they need no locking discipline.
pub trait SessionReporter: Send + Sync {
    fn on_run_start(&self, assemblies: usize, workers: usize);

    fn on_run_end(&self, summary: &RunSummary);
}

/// Default reporter: logs the run banner and the final counts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl SessionReporter for ConsoleReporter {
    fn on_run_start(&self, assemblies: usize, workers: usize) {
        info!("Running {} assemblies on {} workers", assemblies, workers);
    }

    fn on_run_end(&self, summary: &RunSummary) {
        info!(
            "Run completed in {}ms - Pass: {}/{} | Fail: {} | Error: {} | Overall: {}",
            summary.duration_ms,
            summary.passed,
            summary.total,
            summary.failed,
            summary.errors,
            summary.overall
        );
    }
}
