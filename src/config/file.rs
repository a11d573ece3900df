//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./assembly-runner.yaml",
    "./assembly-runner.yml",
    "./.assembly-runner.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Runner defaults applied below environment variables and CLI flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of concurrent workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Filename pattern for directory scans
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Summary output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_workers() -> usize {
    4
}

fn default_pattern() -> String {
    "*.tests".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            pattern: default_pattern(),
            format: default_format(),
        }
    }
}

impl ConfigFile {
    /// Find a configuration file in the standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location, or defaults if none
    /// exists.
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.runner.workers == 0 {
            bail!("runner.workers must be at least 1");
        }
        Ok(())
    }
}
