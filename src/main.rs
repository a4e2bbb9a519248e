//! # file-gauge
//!
//! A CLI tool that reports the raw, gzip, and brotli sizes of files
//! matching a glob pattern, optionally minifying JavaScript sources first,
//! and flags files whose gzip size exceeds a configurable KB budget.
//!
//! One invocation performs one measurement run: expand the glob (minus
//! ignored paths), measure every matched file, print a colored table or a
//! JSON document, exit. Evaluation errors are fatal; either every matched
//! file is measured and one report is printed, or the run aborts before
//! any report.
//!
//! ## Usage
//!
//! ```bash
//! # Measure a bundle against a 50 KB gzip budget
//! file-gauge "dist/**/*.js" --limit 50
//!
//! # Minified sizes in fixed KB with one decimal, for scripting
//! file-gauge "src/**/*.js" --minify -f KB -d 1 --json
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use file_gauge::{config::FileConfig, gauge::Gauge, output::JsonOutput, report};
use std::process::exit;

/// Entry point for the file-gauge application.
///
/// This function handles all errors gracefully by calling [`inner_main`]
/// and printing any errors to stderr before exiting with a non-zero
/// status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers in the config file, expands the glob,
/// measures every match, and renders the report.
///
/// # Errors
///
/// Returns errors for a missing glob argument, malformed patterns,
/// unreadable files, minification failures, or JSON serialization.
/// Evaluation errors are fatal: no partial report is printed.
fn inner_main() -> Result<()> {
    let args = cli::Cli::parse();
    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let Some(pattern) = args.pattern() else {
        bail!("Glob pattern required. See --help");
    };

    if args.limit_unparsable() && !json_mode {
        eprintln!(
            "{}",
            "Warning: could not parse --limit value; no limit applied".yellow()
        );
    }

    let options = args.gauge_options(pattern, &file_config);
    let report_options = args.report_options(&file_config);

    let reports = Gauge::new(options).with_quiet(json_mode).run()?;

    if json_mode {
        let output = JsonOutput::from_reports(&reports, &report_options);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report::render(&reports, &report_options);
    }

    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
