//! assembly-runner - parallel test-assembly execution
//!
//! Runs independent test assemblies across a fixed pool of concurrent
//! workers, aggregates their textual reports without interleaving, and
//! reduces the per-assembly outcomes into one process exit status.
//!
//! ## Features
//!
//! - Fixed worker count with a shared, sealed work queue
//! - Fail-fast: the first failing assembly stops further dispatch while
//!   in-flight assemblies run to completion
//! - Whole-report flushing, so concurrent assemblies never interleave
//! - Exit codes 0 (pass), 1 (fail), 2 (error)
//!
//! ## Usage
//!
//! ```bash
//! # Run every *.tests file under ./build on 4 workers
//! assembly-runner run --dir build --pattern '*.tests' --workers 4
//!
//! # Run explicit assemblies through a wrapper command
//! assembly-runner run --runner mono suite-a.dll suite-b.dll
//!
//! # See what a scan would pick up
//! assembly-runner list --dir build --pattern '*.tests'
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod discovery;
mod engine;
mod executor;
mod models;
mod output;
mod session;

use cli::Args;
use config::{ConfigFile, EnvConfig};
use engine::ProcessEngine;
use executor::WorkerPool;
use models::RunStatus;
use output::{OutputFormat, ReportSink, SummaryFormatter};
use session::ConsoleReporter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let env_config = EnvConfig::load();

    // Diagnostics go to stderr; stdout is reserved for assembly reports.
    let verbose = args.verbose || env_config.verbose.unwrap_or(false);
    FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let status = match dispatch(args, env_config).await {
        Ok(status) => status,
        Err(e) => {
            error!("{e:#}");
            RunStatus::Error
        }
    };

    std::process::exit(status.exit_code());
}

async fn dispatch(args: Args, env_config: EnvConfig) -> Result<RunStatus> {
    match args.command {
        cli::Command::Run(run_args) => run_assemblies(run_args, env_config).await,
        cli::Command::List(list_args) => {
            list_assemblies(list_args)?;
            Ok(RunStatus::Pass)
        }
    }
}

async fn run_assemblies(args: cli::RunArgs, env_config: EnvConfig) -> Result<RunStatus> {
    if env_config.has_any() {
        debug!("applying environment overrides");
    }

    let file_config = match args
        .config
        .or_else(|| env_config.config_file.clone().map(Into::into))
    {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let workers = args
        .workers
        .unwrap_or_else(|| env_config.workers_or(file_config.runner.workers));
    if workers == 0 {
        bail!("worker count must be at least 1");
    }

    let pattern = args
        .pattern
        .unwrap_or_else(|| env_config.pattern_or(&file_config.runner.pattern));

    let format_name = args
        .format
        .unwrap_or_else(|| env_config.format_or(&file_config.runner.format));
    let format = OutputFormat::from_str(&format_name)
        .ok_or_else(|| anyhow::anyhow!("unknown output format: {format_name}"))?;

    if args.assemblies.is_empty() && args.dir.is_none() {
        bail!("nothing to run; pass assembly paths or --dir");
    }

    let assemblies =
        discovery::resolve_assemblies(&args.assemblies, args.dir.as_deref(), &pattern)?;

    let mut engine = ProcessEngine::new();
    if let Some(runner) = args.runner {
        engine = engine.with_runner(runner);
    }

    let pool = WorkerPool::new(
        workers,
        Arc::new(engine),
        Arc::new(ReportSink::stdout()),
    );
    let summary = pool.run(assemblies, &ConsoleReporter).await;

    println!("{}", SummaryFormatter::new(format).format_summary(&summary));

    Ok(summary.overall)
}

fn list_assemblies(args: cli::ListArgs) -> Result<()> {
    let assemblies = discovery::find_assemblies(&args.dir, &args.pattern)?;

    if assemblies.is_empty() {
        println!(
            "No assemblies match {} under {}",
            args.pattern,
            args.dir.display()
        );
        return Ok(());
    }

    for assembly in &assemblies {
        println!("  {}", assembly.path().display());
    }
    println!("\n{} assemblies", assemblies.len());

    Ok(())
}
