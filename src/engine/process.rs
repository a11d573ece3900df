//! Child-process execution engine
//!
//! Runs an assembly as a child process, optionally through a wrapper
//! command such as `dotnet` or `mono`, and captures its output into the
//! report listener.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

use super::{EngineError, ReportListener, TestEngine};
use crate::models::Assembly;

/// Engine that executes the assembly file as a child process.
///
/// The child's exit status is the verdict: a non-zero exit marks the
/// listener's failure flag. A hung child hangs its worker; no timeout is
/// imposed.
#[derive(Clone, Debug, Default)]
pub struct ProcessEngine {
    runner: Option<PathBuf>,
    runner_args: Vec<String>,
}

impl ProcessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute assemblies through a wrapper command instead of running the
    /// file directly, e.g. `dotnet` or `mono`.
    pub fn with_runner(mut self, runner: impl Into<PathBuf>) -> Self {
        self.runner = Some(runner.into());
        self
    }

    /// Add an argument passed to the wrapper command before the assembly
    /// path.
    pub fn runner_arg(mut self, arg: impl Into<String>) -> Self {
        self.runner_args.push(arg.into());
        self
    }

    fn command(&self, assembly: &Assembly) -> Command {
        match &self.runner {
            Some(runner) => {
                let mut cmd = Command::new(runner);
                cmd.args(&self.runner_args);
                cmd.arg(assembly.path());
                cmd
            }
            None => Command::new(assembly.path()),
        }
    }
}

#[async_trait]
impl TestEngine for ProcessEngine {
    async fn run_assembly(
        &self,
        assembly: &Assembly,
        listener: &mut dyn ReportListener,
    ) -> Result<(), EngineError> {
        let output = self
            .command(assembly)
            .output()
            .await
            .map_err(|source| EngineError::Process {
                assembly: assembly.name(),
                source,
            })?;

        listener.report(&String::from_utf8_lossy(&output.stdout));
        if !output.stderr.is_empty() {
            listener.report(&String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            listener.mark_failure();
        }

        Ok(())
    }
}
