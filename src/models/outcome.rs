//! Run status model
//!
//! The three-way outcome of one assembly run and the reduction rule that
//! folds many outcomes into one overall status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of running a single assembly, and of a whole run.
///
/// The derived ordering is the severity ordering (`Pass < Fail < Error`),
/// so `max` over any collection of statuses is the reduction rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// The assembly ran and every test passed.
    Pass,
    /// The assembly ran and reported failing tests.
    Fail,
    /// The run itself broke before a verdict could be produced.
    Error,
}

impl RunStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            RunStatus::Pass => "✓",
            RunStatus::Fail => "✗",
            RunStatus::Error => "!",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, RunStatus::Pass)
    }

    /// Process exit code conventionally mapped to this status.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Pass => 0,
            RunStatus::Fail => 1,
            RunStatus::Error => 2,
        }
    }

    /// Fold statuses into one: the highest severity observed wins.
    ///
    /// Commutative and order-independent; an empty collection reduces to
    /// `Pass`.
    pub fn reduce(statuses: impl IntoIterator<Item = RunStatus>) -> RunStatus {
        statuses.into_iter().fold(RunStatus::Pass, RunStatus::max)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Pass => write!(f, "PASS"),
            RunStatus::Fail => write!(f, "FAIL"),
            RunStatus::Error => write!(f, "ERROR"),
        }
    }
}
