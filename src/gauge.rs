//! Glob expansion and per-file measurement orchestration.
//!
//! This module expands the configured glob against the filesystem, filters
//! out ignored paths, and runs the size evaluator over every match. Files
//! are measured in parallel since each evaluation is independent, but the
//! report always preserves glob-expansion order.

use std::path::PathBuf;

use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{
    config::GaugeOptions,
    error::GaugeError,
    measure::{self, FileReport, Thresholds},
};

/// Orchestrates glob expansion and file measurement.
///
/// The `Gauge` struct encapsulates one measurement run: expanding the glob
/// (minus ignored paths), deriving the byte thresholds from the KB budget,
/// and evaluating every matched file.
pub struct Gauge {
    /// Options for this run
    options: GaugeOptions,

    /// When `true`, suppresses progress output (used by `--json` mode and tests).
    quiet: bool,
}

impl Gauge {
    /// Create a new gauge for the given options.
    #[must_use]
    pub const fn new(options: GaugeOptions) -> Self {
        Self {
            options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress bar).
    ///
    /// When quiet mode is active no progress is drawn, which is required
    /// for `--json` output so that only the final JSON is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Expand the glob and measure every matched file.
    ///
    /// Matches are evaluated in parallel but collected in glob-expansion
    /// order. An empty match set is not an error; the caller decides how
    /// to present it.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::Pattern`] for a malformed glob or ignore
    /// pattern, [`GaugeError::Walk`] when expansion hits an unreadable
    /// directory, and whatever [`measure::evaluate`] reports for an
    /// individual file. The first failure aborts the whole run.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, though
    /// this should not occur as the template is hardcoded and valid.
    pub fn run(&self) -> Result<Vec<FileReport>, GaugeError> {
        let paths = self.expand()?;
        let thresholds = Thresholds::from_limit_kb(self.options.limit_kb);

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(paths.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Measuring {pos}/{len}")
                    .unwrap(),
            );
            pb
        };

        let reports: Result<Vec<_>, _> = paths
            .par_iter()
            .map(|path| {
                let report = measure::evaluate(path, self.options.minify, &thresholds);
                progress.inc(1);
                report
            })
            .collect();

        progress.finish_and_clear();

        reports
    }

    /// Expand the glob, drop ignored paths, and keep only regular files.
    ///
    /// Expansion semantics (`*`, `**`, `{}`, `?`, ordering) are delegated
    /// to the glob engine, which returns matches in sorted order.
    fn expand(&self) -> Result<Vec<PathBuf>, GaugeError> {
        let ignore = self
            .options
            .ignore
            .as_deref()
            .map(|raw| {
                Pattern::new(raw).map_err(|source| GaugeError::Pattern {
                    pattern: raw.to_string(),
                    source,
                })
            })
            .transpose()?;

        let walker = glob::glob(&self.options.pattern).map_err(|source| GaugeError::Pattern {
            pattern: self.options.pattern.clone(),
            source,
        })?;

        let mut paths = Vec::new();

        for entry in walker {
            let path = entry.map_err(|source| GaugeError::Walk { source })?;

            if !path.is_file() {
                continue;
            }

            if let Some(ref pattern) = ignore
                && pattern.matches_path(&path)
            {
                continue;
            }

            paths.push(path);
        }

        Ok(paths)
    }
}

/// Measure every file matched by `options`, quietly.
///
/// Shorthand for [`Gauge::new`] with progress output suppressed; the
/// binary drives [`Gauge`] directly so it can show progress.
///
/// # Errors
///
/// Propagates the same errors as [`Gauge::run`].
pub fn gauge(options: &GaugeOptions) -> Result<Vec<FileReport>, GaugeError> {
    Gauge::new(options.clone()).with_quiet(true).run()
}
