//! Per-assembly records and the run summary
//!
//! Workers accumulate records privately and the pool merges them once every
//! worker has terminated.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Assembly, RunStatus};

/// Result of one assembly's execution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssemblyRecord {
    pub assembly: String,
    pub status: RunStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl AssemblyRecord {
    pub fn new(assembly: &Assembly, status: RunStatus, duration_ms: u64) -> Self {
        Self {
            assembly: assembly.name(),
            status,
            duration_ms,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for AssemblyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.assembly,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of one whole run.
///
/// `total` counts assemblies that were actually executed; assemblies never
/// reached because of fail-fast cancellation do not appear.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub overall: RunStatus,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub records: Vec<AssemblyRecord>,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Utc>,
        overall: RunStatus,
        duration_ms: u64,
        records: Vec<AssemblyRecord>,
    ) -> Self {
        let total = records.len();
        let passed = records
            .iter()
            .filter(|r| r.status == RunStatus::Pass)
            .count();
        let failed = records
            .iter()
            .filter(|r| r.status == RunStatus::Fail)
            .count();
        let errors = records
            .iter()
            .filter(|r| r.status == RunStatus::Error)
            .count();

        Self {
            started_at,
            overall,
            total,
            passed,
            failed,
            errors,
            duration_ms,
            records,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for record in &self.records {
            writeln!(f, "  {record}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Error: {}",
            self.total, self.passed, self.failed, self.errors
        )?;
        writeln!(
            f,
            "Overall: {} | Duration: {}ms",
            self.overall, self.duration_ms
        )
    }
}
