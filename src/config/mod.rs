//! Configuration module
//!
//! Layered configuration: defaults, then config file, then environment
//! variables, then CLI flags.

mod env;
mod file;

pub use env::EnvConfig;
pub use file::{ConfigFile, RunnerConfig};
