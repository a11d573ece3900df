//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parallel test-assembly runner
#[derive(Parser, Debug)]
#[command(name = "assembly-runner")]
#[command(version)]
#[command(about = "Run test assemblies across a fixed pool of workers")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run test assemblies
    Run(RunArgs),

    /// List the assemblies a scan would run
    List(ListArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Assembly files to run
    pub assemblies: Vec<PathBuf>,

    /// Directory to scan for assemblies
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Filename pattern for directory scans
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Number of concurrent workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Wrapper command used to execute each assembly (e.g. dotnet, mono)
    #[arg(long)]
    pub runner: Option<PathBuf>,

    /// Summary format (table, json, json-pretty)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory to scan for assemblies
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Filename pattern for directory scans
    #[arg(short, long, default_value = "*.tests")]
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_args_parsing() {
        let args = Args::parse_from([
            "assembly-runner",
            "run",
            "--dir",
            "build",
            "--pattern",
            "*.tests",
            "--workers",
            "8",
            "suite-a.tests",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.dir, Some(PathBuf::from("build")));
                assert_eq!(run_args.pattern.as_deref(), Some("*.tests"));
                assert_eq!(run_args.workers, Some(8));
                assert_eq!(run_args.assemblies, [PathBuf::from("suite-a.tests")]);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn list_args_defaults() {
        let args = Args::parse_from(["assembly-runner", "list"]);
        match args.command {
            Command::List(list_args) => {
                assert_eq!(list_args.dir, PathBuf::from("."));
                assert_eq!(list_args.pattern, "*.tests");
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let args = Args::parse_from(["assembly-runner", "run", "--verbose"]);
        assert!(args.verbose);
    }
}
