//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their
//! validation using the [clap](https://docs.rs/clap/) library. It provides
//! structured access to user input and handles defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config: CLI argument > config file > hardcoded default).

use clap::{Parser, ValueEnum};

use file_gauge::config::{FileConfig, GaugeOptions, ReportOptions, SizeUnit, parse_limit};

/// Main command-line interface structure.
///
/// The glob positional is optional at the parser level so that a missing
/// glob is reported as this tool's own usage error (message on stderr,
/// exit code 1) rather than clap's default usage failure.
#[derive(Parser)]
#[command(name = "file-gauge")]
#[command(about = "Report raw, gzip, and brotli sizes of files matching a glob pattern")]
#[command(version)]
pub struct Cli {
    /// Glob pattern of files to measure, e.g. "dist/**/*.js"
    #[arg(value_name = "GLOB")]
    pattern: Option<String>,

    /// Minify the files before measuring. Only works with JavaScript files
    #[arg(short = 'm', long)]
    minify: bool,

    /// A KB file limit (1 KB = 1024 bytes)
    ///
    /// Files appear red if their gzip size exceeds this, or yellow if
    /// within 10% of it. Unparsable values fall back to "no limit".
    #[arg(short = 'l', long, value_name = "KB")]
    limit: Option<String>,

    /// A glob pattern of files to ignore
    #[arg(short = 'i', long, value_name = "GLOB")]
    ignore: Option<String>,

    /// Format to show the sizes in
    #[arg(short = 'f', long, value_enum)]
    format: Option<SizeUnit>,

    /// Amount of decimals to show
    #[arg(short = 'd', long)]
    decimals: Option<i32>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress, the
    /// table) is suppressed and a single JSON document is printed to
    /// stdout.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// The glob positional, when given.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Whether a `--limit` value was given but could not be parsed.
    ///
    /// Used by the binary to warn that the run proceeds without a limit.
    #[must_use]
    pub fn limit_unparsable(&self) -> bool {
        self.limit
            .as_deref()
            .is_some_and(|raw| parse_limit(raw).is_none())
    }

    /// Extract gauge options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default. The glob pattern
    /// itself never comes from the config file; it is this tool's one
    /// required input.
    #[must_use]
    pub fn gauge_options(&self, pattern: &str, config: &FileConfig) -> GaugeOptions {
        GaugeOptions {
            pattern: pattern.to_string(),
            ignore: self.ignore.clone().or_else(|| config.gauge.ignore.clone()),
            minify: self.minify || config.gauge.minify.unwrap_or(false),
            limit_kb: self
                .limit
                .as_deref()
                .and_then(parse_limit)
                .or(config.gauge.limit),
        }
    }

    /// Extract report options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (`auto`, 2 decimals).
    /// An unrecognized unit name in the config file is ignored.
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        ReportOptions {
            unit: self
                .format
                .or_else(|| {
                    config
                        .report
                        .format
                        .as_ref()
                        .and_then(|s| SizeUnit::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            decimals: self.decimals.or(config.report.decimals).unwrap_or(2),
        }
    }
}
