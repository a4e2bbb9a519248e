//! Gauge and report option structures.
//!
//! This module defines the effective options a run operates on, after CLI
//! arguments and config-file values have been layered together, plus the
//! display unit enumeration shared by the CLI and the byte formatter.

use clap::ValueEnum;

/// Display unit for formatted byte counts.
///
/// All units are 1024-based (`KB` is 1024 bytes). [`SizeUnit::Auto`] picks
/// the largest unit that keeps the displayed value at or above 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum SizeUnit {
    /// Pick the largest unit keeping the value at or above 1
    #[default]
    #[value(name = "auto")]
    Auto,

    /// Bytes
    #[value(name = "B")]
    B,

    /// Kilobytes (1024 bytes)
    #[value(name = "KB")]
    Kb,

    /// Megabytes (1024² bytes)
    #[value(name = "MB")]
    Mb,

    /// Gigabytes (1024³ bytes)
    #[value(name = "GB")]
    Gb,

    /// Terabytes (1024⁴ bytes)
    #[value(name = "TB")]
    Tb,

    /// Petabytes (1024⁵ bytes)
    #[value(name = "PB")]
    Pb,
}

impl SizeUnit {
    /// Index into the unit table (powers of 1024), or `None` for
    /// automatic selection.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Auto => None,
            Self::B => Some(0),
            Self::Kb => Some(1),
            Self::Mb => Some(2),
            Self::Gb => Some(3),
            Self::Tb => Some(4),
            Self::Pb => Some(5),
        }
    }
}

/// Options controlling which files are measured and how.
///
/// Constructed once per invocation from CLI input (with config-file
/// defaults layered underneath) and immutable thereafter.
#[derive(Clone)]
pub struct GaugeOptions {
    /// Glob pattern selecting the files to measure
    pub pattern: String,

    /// Optional glob pattern of paths to exclude from the match set
    pub ignore: Option<String>,

    /// Whether to minify JavaScript sources before measuring
    pub minify: bool,

    /// Size budget in KB (1024 bytes); `None` means no limit
    pub limit_kb: Option<f64>,
}

/// Options controlling how sizes are rendered.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    /// Unit to display sizes in
    pub unit: SizeUnit,

    /// Number of decimal places (negative values clamp to 0)
    pub decimals: i32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            unit: SizeUnit::Auto,
            decimals: 2,
        }
    }
}

/// Parse a `--limit` value best-effort.
///
/// Returns `None` for unparsable or NaN input, which callers treat as
/// "no limit". Negative and infinite values are preserved as-is: a
/// negative budget classifies every file as `danger`, an infinite one
/// classifies nothing.
#[must_use]
pub fn parse_limit(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_unit_indices() {
        assert_eq!(SizeUnit::Auto.index(), None);
        assert_eq!(SizeUnit::B.index(), Some(0));
        assert_eq!(SizeUnit::Kb.index(), Some(1));
        assert_eq!(SizeUnit::Mb.index(), Some(2));
        assert_eq!(SizeUnit::Gb.index(), Some(3));
        assert_eq!(SizeUnit::Tb.index(), Some(4));
        assert_eq!(SizeUnit::Pb.index(), Some(5));
    }

    #[test]
    fn test_size_unit_default_is_auto() {
        assert_eq!(SizeUnit::default(), SizeUnit::Auto);
    }

    #[test]
    fn test_parse_limit_valid_values() {
        assert_eq!(parse_limit("50"), Some(50.0));
        assert_eq!(parse_limit("1.5"), Some(1.5));
        assert_eq!(parse_limit(" 12 "), Some(12.0));
        assert_eq!(parse_limit("-5"), Some(-5.0));
    }

    #[test]
    fn test_parse_limit_unparsable_is_no_limit() {
        assert_eq!(parse_limit("fifty"), None);
        assert_eq!(parse_limit(""), None);
        assert_eq!(parse_limit("NaN"), None);
        assert_eq!(parse_limit("12kb"), None);
    }

    #[test]
    fn test_report_options_defaults() {
        let options = ReportOptions::default();

        assert_eq!(options.unit, SizeUnit::Auto);
        assert_eq!(options.decimals, 2);
    }
}
