//! Summary formatters
//!
//! Table and JSON renderings of the final run summary. Assembly reports
//! themselves pass through the sink verbatim; only the trailing summary is
//! formatted here.

#![allow(dead_code)]

use std::fmt::Write;

use crate::models::{RunStatus, RunSummary};

/// Output format options for the run summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

/// Summary formatter
pub struct SummaryFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl SummaryFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
        }
    }

    fn format_table(&self, summary: &RunSummary) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for record in &summary.records {
            let _ = writeln!(
                out,
                "  {} {:30} [{:>6}ms]{}",
                self.status_label(record.status),
                record.assembly,
                record.duration_ms,
                record
                    .message
                    .as_deref()
                    .map(|m| format!(" - {m}"))
                    .unwrap_or_default()
            );
        }
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        let _ = writeln!(
            out,
            "Total: {} | Pass: {} | Fail: {} | Error: {}",
            summary.total, summary.passed, summary.failed, summary.errors
        );
        let _ = writeln!(
            out,
            "Overall: {} | Duration: {}ms",
            self.status_label(summary.overall),
            summary.duration_ms
        );

        out
    }

    fn status_label(&self, status: RunStatus) -> String {
        if self.colorize {
            match status {
                RunStatus::Pass => "\x1b[32m✓ PASS\x1b[0m".to_string(),
                RunStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m".to_string(),
                RunStatus::Error => "\x1b[31m! ERROR\x1b[0m".to_string(),
            }
        } else {
            format!("{} {}", status.symbol(), status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assembly, AssemblyRecord};
    use chrono::Utc;

    fn summary() -> RunSummary {
        let records = vec![
            AssemblyRecord::new(&Assembly::new("a.tests"), RunStatus::Pass, 12),
            AssemblyRecord::new(&Assembly::new("b.tests"), RunStatus::Fail, 7),
        ];
        RunSummary::new(Utc::now(), RunStatus::Fail, 19, records)
    }

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn table_lists_every_record() {
        let out = SummaryFormatter::new(OutputFormat::Table)
            .no_color()
            .format_summary(&summary());
        assert!(out.contains("a.tests"));
        assert!(out.contains("b.tests"));
        assert!(out.contains("Total: 2 | Pass: 1 | Fail: 1 | Error: 0"));
    }

    #[test]
    fn json_is_parseable() {
        let out = SummaryFormatter::new(OutputFormat::Json).format_summary(&summary());
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["overall"], "fail");
        assert_eq!(value["total"], 2);
    }
}
