//! Per-file size evaluation and threshold classification.
//!
//! This module measures a single file: it reads the content as text,
//! optionally minifies it, computes the raw, gzip, and brotli byte lengths
//! of the same text, and classifies the gzip size against the configured
//! size budget. Evaluation is side-effect free beyond the file read and is
//! idempotent for an unchanged file.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use brotli::enc::BrotliEncoderParams;
use colored::Color;
use flate2::{Compression, write::GzEncoder};
use serde::Serialize;

use crate::{error::GaugeError, minify};

/// Severity tier for a measured file, derived from its gzip size.
///
/// Tiers are totally ordered: `Ok < Warn < Danger`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Within the budget (or no budget configured)
    Ok,

    /// Within 10% below the budget, boundary inclusive
    Warn,

    /// Over the budget
    Danger,
}

impl Status {
    /// Terminal color associated with the status.
    ///
    /// `Ok` rows keep the default foreground color.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Ok => None,
            Self::Warn => Some(Color::Yellow),
            Self::Danger => Some(Color::Red),
        }
    }
}

/// Byte thresholds derived from the configured KB budget.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
    /// Gzip sizes above this are [`Status::Danger`]
    pub limit: f64,

    /// Gzip sizes above this (but within the limit) are [`Status::Warn`]
    pub warning: f64,
}

impl Thresholds {
    /// Derive byte thresholds from a KB budget (1 KB = 1024 bytes).
    ///
    /// The warning threshold sits at 90% of the limit. `None` means no
    /// budget was configured: both thresholds become `+∞` and every file
    /// classifies as [`Status::Ok`].
    #[must_use]
    pub fn from_limit_kb(limit_kb: Option<f64>) -> Self {
        let limit = limit_kb.map_or(f64::INFINITY, |kb| kb * 1024.0);

        Self {
            limit,
            warning: limit * 0.9,
        }
    }
}

/// Measured sizes and status for a single file.
///
/// Computed once per invocation and never mutated after creation.
#[derive(Clone, Serialize)]
pub struct FileReport {
    /// Path as returned by glob expansion
    pub path: PathBuf,

    /// Severity tier derived from the gzip size
    pub status: Status,

    /// Byte length of the (possibly minified) text
    pub raw: u64,

    /// Gzip-compressed byte length of the same text
    pub gzip: u64,

    /// Brotli-compressed byte length of the same text
    pub brotli: u64,
}

/// Classify a gzip size against the configured thresholds.
///
/// `Danger` when the size exceeds the limit, `Warn` when it is within 10%
/// below the limit (the limit itself included), `Ok` otherwise. Monotonic:
/// a larger gzip size never yields a lower severity.
#[must_use]
pub fn classify(gzip: u64, thresholds: &Thresholds) -> Status {
    let size = gzip as f64;

    if size > thresholds.limit {
        Status::Danger
    } else if size > thresholds.warning {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Measure a single file.
///
/// Reads the file as text, optionally minifies it, and computes the raw,
/// gzip, and brotli byte lengths of the same (possibly minified) text.
/// The status is derived from the gzip size.
///
/// # Arguments
///
/// * `path` - The file to measure
/// * `minify_source` - Whether to minify before measuring
/// * `thresholds` - Byte thresholds for status classification
///
/// # Errors
///
/// Returns [`GaugeError::Io`] if the file cannot be read and
/// [`GaugeError::Minify`] if minification was requested and failed. The
/// caller asked for minified sizes, so there is no fallback to the
/// unminified source.
pub fn evaluate(
    path: &Path,
    minify_source: bool,
    thresholds: &Thresholds,
) -> Result<FileReport, GaugeError> {
    let mut code = fs::read_to_string(path).map_err(|source| GaugeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if minify_source {
        code = minify::minify(path, &code)?;
    }

    let raw = code.len() as u64;
    let gzip = gzip_len(code.as_bytes()).map_err(|source| GaugeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let brotli = brotli_len(code.as_bytes()).map_err(|source| GaugeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        status: classify(gzip, thresholds),
        raw,
        gzip,
        brotli,
    })
}

/// Gzip-compressed length of `bytes` at the codec's default level.
fn gzip_len(bytes: &[u8]) -> std::io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;

    Ok(encoder.finish()?.len() as u64)
}

/// Brotli-compressed length of `bytes` at the encoder's defaults.
fn brotli_len(mut bytes: &[u8]) -> std::io::Result<u64> {
    let mut compressed = Vec::new();
    let params = BrotliEncoderParams::default();
    brotli::BrotliCompress(&mut bytes, &mut compressed, &params)?;

    Ok(compressed.len() as u64)
}
