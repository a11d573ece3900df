//! Test execution engine
//!
//! The pool treats execution as an opaque call: given one assembly and a
//! report listener, an engine runs it to completion and reports through the
//! listener. A negative verdict surfaces as the listener's failure flag; an
//! error returned from the call classifies the assembly as Error.

#![allow(dead_code)]

mod process;

pub use process::ProcessEngine;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Assembly;

/// Errors surfaced by an engine while dispatching an assembly.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to run {assembly}: {source}")]
    Process {
        assembly: String,
        #[source]
        source: std::io::Error,
    },
}

/// Receives report text during one assembly's execution.
pub trait ReportListener: Send {
    /// Append text to the assembly's report.
    fn report(&mut self, text: &str);

    /// Record that at least one test in the assembly failed.
    fn mark_failure(&mut self);
}

/// Runs one assembly to completion.
#[async_trait]
pub trait TestEngine: Send + Sync {
    /// Execute `assembly`, writing its report through `listener`.
    ///
    /// `Ok` with the listener's failure flag set means the assembly ran and
    /// reported failing tests; `Err` means the dispatch itself broke. The
    /// call blocks its worker for the assembly's whole duration; no timeout
    /// is imposed here.
    async fn run_assembly(
        &self,
        assembly: &Assembly,
        listener: &mut dyn ReportListener,
    ) -> Result<(), EngineError>;
}

/// Private per-assembly report accumulation.
///
/// Owned by the worker that created it until the flush; nothing reaches the
/// shared sink while the assembly is still executing.
#[derive(Debug, Default)]
pub struct ReportBuffer {
    text: String,
    failed: bool,
}

impl ReportBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the listener recorded a failing test.
    pub fn failure_occurred(&self) -> bool {
        self.failed
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl ReportListener for ReportBuffer {
    fn report(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn mark_failure(&mut self) {
        self.failed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_accumulates_in_order() {
        let mut buffer = ReportBuffer::new();
        buffer.report("first\n");
        buffer.report("second\n");
        assert_eq!(buffer.as_bytes(), b"first\nsecond\n");
        assert!(!buffer.failure_occurred());
    }

    #[test]
    fn failure_flag_sticks() {
        let mut buffer = ReportBuffer::new();
        buffer.mark_failure();
        buffer.report("after failure\n");
        assert!(buffer.failure_occurred());
    }

    #[test]
    fn fresh_buffer_is_empty() {
        assert!(ReportBuffer::new().is_empty());
    }
}
