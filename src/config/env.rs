//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

#![allow(dead_code)]

use std::env;
use std::str::FromStr;

/// Environment variable prefix
const ENV_PREFIX: &str = "ASSEMBLY_RUNNER";

/// Configuration read from environment variables.
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Worker count from ASSEMBLY_RUNNER_WORKERS
    pub workers: Option<usize>,
    /// Discovery pattern from ASSEMBLY_RUNNER_PATTERN
    pub pattern: Option<String>,
    /// Summary format from ASSEMBLY_RUNNER_FORMAT
    pub format: Option<String>,
    /// Verbose from ASSEMBLY_RUNNER_VERBOSE
    pub verbose: Option<bool>,
    /// Config file from ASSEMBLY_RUNNER_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            workers: get_env_parse("WORKERS"),
            pattern: get_env("PATTERN"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.workers.is_some()
            || self.pattern.is_some()
            || self.format.is_some()
            || self.verbose.is_some()
            || self.config_file.is_some()
    }

    /// Get worker count with fallback
    pub fn workers_or(&self, default: usize) -> usize {
        self.workers.unwrap_or(default)
    }

    /// Get pattern with fallback
    pub fn pattern_or(&self, default: &str) -> String {
        self.pattern.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get format with fallback
    pub fn format_or(&self, default: &str) -> String {
        self.format.clone().unwrap_or_else(|| default.to_string())
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{key}"))
        .ok()
        .filter(|v| !v.is_empty())
}

fn get_env_parse<T: FromStr>(key: &str) -> Option<T> {
    get_env(key).and_then(|v| v.parse().ok())
}

fn get_env_bool(key: &str) -> Option<bool> {
    get_env(key).map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_helpers() {
        env::set_var("ASSEMBLY_RUNNER_TEST_PARSE", "6");
        assert_eq!(get_env_parse::<usize>("TEST_PARSE"), Some(6));
        env::set_var("ASSEMBLY_RUNNER_TEST_PARSE", "not a number");
        assert_eq!(get_env_parse::<usize>("TEST_PARSE"), None);
        env::remove_var("ASSEMBLY_RUNNER_TEST_PARSE");
    }

    #[test]
    fn bool_helper() {
        env::set_var("ASSEMBLY_RUNNER_TEST_BOOL", "true");
        assert_eq!(get_env_bool("TEST_BOOL"), Some(true));
        env::set_var("ASSEMBLY_RUNNER_TEST_BOOL", "0");
        assert_eq!(get_env_bool("TEST_BOOL"), Some(false));
        env::remove_var("ASSEMBLY_RUNNER_TEST_BOOL");
        assert_eq!(get_env_bool("TEST_BOOL"), None);
    }

    #[test]
    fn empty_value_reads_as_unset() {
        env::set_var("ASSEMBLY_RUNNER_TEST_EMPTY", "");
        assert_eq!(get_env("TEST_EMPTY"), None);
        env::remove_var("ASSEMBLY_RUNNER_TEST_EMPTY");
    }

    #[test]
    fn fallbacks() {
        let config = EnvConfig::default();
        assert!(!config.has_any());
        assert_eq!(config.workers_or(4), 4);
        assert_eq!(config.pattern_or("*.tests"), "*.tests");
        assert_eq!(config.format_or("table"), "table");
    }
}
