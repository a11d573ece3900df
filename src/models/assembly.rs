//! Assembly work item
//!
//! An opaque handle to one independently executable test assembly.

use std::fmt;
use std::path::{Path, PathBuf};

/// One unit of test work, immutable once enqueued.
///
/// Exactly one worker ever processes a given assembly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Assembly {
    path: PathBuf,
}

impl Assembly {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in records and log lines.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
