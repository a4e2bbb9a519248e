//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a gauge run. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing
//! all human-readable output.

use serde::Serialize;

use crate::{
    config::ReportOptions,
    measure::{FileReport, Status},
    utils::format_bytes,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize)]
pub struct JsonOutput {
    /// One entry per matched file, in glob-expansion order.
    pub files: Vec<JsonFileEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single file entry in the JSON output.
#[derive(Serialize)]
pub struct JsonFileEntry {
    /// File path as returned by glob expansion.
    pub path: String,

    /// Status tier (`"ok"`, `"warn"`, `"danger"`).
    pub status: Status,

    /// Raw size in bytes (after minification, when enabled).
    pub raw: u64,

    /// Human-readable formatted raw size (e.g. `"1.5KB"`).
    pub raw_formatted: String,

    /// Gzip-compressed size in bytes.
    pub gzip: u64,

    /// Human-readable formatted gzip size.
    pub gzip_formatted: String,

    /// Brotli-compressed size in bytes.
    pub brotli: u64,

    /// Human-readable formatted brotli size.
    pub brotli_formatted: String,
}

/// Aggregated summary across all matched files.
#[derive(Serialize)]
pub struct JsonSummary {
    /// Total number of files measured.
    pub total_files: usize,

    /// Sum of raw sizes in bytes.
    pub total_raw: u64,

    /// Sum of gzip sizes in bytes.
    pub total_gzip: u64,

    /// Sum of brotli sizes in bytes.
    pub total_brotli: u64,

    /// Number of files over the configured budget.
    pub over_limit: usize,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a slice of file reports.
    #[must_use]
    pub fn from_reports(reports: &[FileReport], options: &ReportOptions) -> Self {
        Self {
            files: reports
                .iter()
                .map(|report| JsonFileEntry::from_report(report, options))
                .collect(),
            summary: JsonSummary::from_reports(reports),
        }
    }
}

impl JsonFileEntry {
    /// Convert a `FileReport` into a `JsonFileEntry`.
    #[must_use]
    pub fn from_report(report: &FileReport, options: &ReportOptions) -> Self {
        Self {
            path: report.path.display().to_string(),
            status: report.status,
            raw: report.raw,
            raw_formatted: format_bytes(report.raw, options.unit, options.decimals),
            gzip: report.gzip,
            gzip_formatted: format_bytes(report.gzip, options.unit, options.decimals),
            brotli: report.brotli,
            brotli_formatted: format_bytes(report.brotli, options.unit, options.decimals),
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from a slice of file reports.
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        Self {
            total_files: reports.len(),
            total_raw: reports.iter().map(|r| r.raw).sum(),
            total_gzip: reports.iter().map(|r| r.gzip).sum(),
            total_brotli: reports.iter().map(|r| r.brotli).sum(),
            over_limit: reports
                .iter()
                .filter(|r| r.status == Status::Danger)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::SizeUnit;

    fn report(path: &str, status: Status, raw: u64, gzip: u64, brotli: u64) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            status,
            raw,
            gzip,
            brotli,
        }
    }

    #[test]
    fn test_summary_totals() {
        let reports = vec![
            report("a.js", Status::Ok, 100, 50, 40),
            report("b.js", Status::Danger, 200, 90, 80),
        ];
        let summary = JsonSummary::from_reports(&reports);

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_raw, 300);
        assert_eq!(summary.total_gzip, 140);
        assert_eq!(summary.total_brotli, 120);
        assert_eq!(summary.over_limit, 1);
    }

    #[test]
    fn test_entries_keep_order_and_format_sizes() {
        let reports = vec![
            report("first.js", Status::Ok, 1536, 1024, 512),
            report("second.js", Status::Warn, 10, 5, 4),
        ];
        let options = ReportOptions {
            unit: SizeUnit::Kb,
            decimals: 2,
        };
        let output = JsonOutput::from_reports(&reports, &options);

        assert_eq!(output.files.len(), 2);
        assert_eq!(output.files[0].path, "first.js");
        assert_eq!(output.files[0].raw_formatted, "1.50KB");
        assert_eq!(output.files[1].path, "second.js");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let reports = vec![report("a.js", Status::Danger, 1, 1, 1)];
        let output = JsonOutput::from_reports(&reports, &ReportOptions::default());
        let json = serde_json::to_string(&output).expect("serializable");

        assert!(json.contains("\"status\":\"danger\""));
    }

    #[test]
    fn test_empty_reports_produce_empty_document() {
        let output = JsonOutput::from_reports(&[], &ReportOptions::default());

        assert!(output.files.is_empty());
        assert_eq!(output.summary.total_files, 0);
        assert_eq!(output.summary.over_limit, 0);
    }
}
