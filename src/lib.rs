//! # file-gauge
//!
//! A CLI tool that reports the raw, gzip-compressed, and brotli-compressed
//! size of files matching a glob pattern, optionally minifying JavaScript
//! sources first, and flags files whose gzip size exceeds a configurable
//! KB budget.
//!
//! The tool runs once per invocation: it expands the glob, measures every
//! matched file, and prints a colored table (or a single JSON document in
//! `--json` mode). Nothing is written to disk and no state is kept between
//! runs.
//!
//! ## Features
//!
//! - Raw, gzip, and brotli byte counts per matched file
//! - Optional JavaScript minification before measuring
//! - Size budget with `ok` / `warn` / `danger` tiers (yellow within 10% of
//!   the limit, red above it)
//! - Human-readable sizes in a fixed or automatically chosen 1024-based unit
//! - Structured `--json` output for scripting
//! - Persistent defaults via `~/.config/file-gauge/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Measure a bundle against a 50 KB gzip budget
//! file-gauge "dist/**/*.js" --limit 50
//!
//! # Minified sizes, ignoring already-minified files
//! file-gauge "src/**/*.js" --minify --ignore "**/*.min.js"
//! ```

pub mod config;
pub mod error;
pub mod gauge;
pub mod measure;
pub mod minify;
pub mod output;
pub mod report;
pub mod utils;

pub use config::{FileConfig, GaugeOptions, ReportOptions, SizeUnit};
pub use error::GaugeError;
pub use measure::{FileReport, Status};
