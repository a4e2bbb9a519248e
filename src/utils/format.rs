//! Byte count formatting.
//!
//! This module converts raw byte counts into human-readable strings using
//! 1024-based units, either in a caller-chosen unit or in the largest unit
//! that keeps the value at or above 1.

use crate::config::SizeUnit;

/// Unit suffixes, smallest to largest. Each step is a factor of 1024.
const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable string.
///
/// Zero always formats as `"0B"` regardless of unit and decimals. In
/// fixed-unit mode the value keeps exactly `decimals` places
/// (`format_bytes(1536, SizeUnit::Kb, 2)` is `"1.50KB"`); in auto mode the
/// largest unit keeping the value at or above 1 is chosen and trailing
/// zeros introduced by rounding are dropped (`"1.5KB"`).
///
/// Negative `decimals` values are clamped to 0.
///
/// # Arguments
///
/// * `bytes` - The byte count to format
/// * `unit` - The display unit, or [`SizeUnit::Auto`] for automatic selection
/// * `decimals` - Number of decimal places to round to
///
/// # Examples
///
/// ```
/// # use file_gauge::config::SizeUnit;
/// # use file_gauge::utils::format_bytes;
/// assert_eq!(format_bytes(0, SizeUnit::Auto, 2), "0B");
/// assert_eq!(format_bytes(1536, SizeUnit::Kb, 2), "1.50KB");
/// assert_eq!(format_bytes(1536, SizeUnit::Auto, 2), "1.5KB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64, unit: SizeUnit, decimals: i32) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let decimals = usize::try_from(decimals.max(0)).unwrap_or(0);

    match unit.index() {
        Some(index) => format_fixed(bytes, index, decimals),
        None => format_auto(bytes, decimals),
    }
}

/// Format using a fixed unit, keeping exactly `decimals` places.
fn format_fixed(bytes: u64, index: usize, decimals: usize) -> String {
    let value = scale(bytes, index);
    format!("{value:.decimals$}{}", UNITS[index])
}

/// Format in the largest unit that keeps the value at or above 1,
/// dropping trailing zeros introduced by the decimal rounding.
fn format_auto(bytes: u64, decimals: usize) -> String {
    let index = auto_index(bytes);
    let rounded = format!("{:.decimals$}", scale(bytes, index));
    let value: f64 = rounded.parse().unwrap_or_default();

    format!("{value}{}", UNITS[index])
}

/// Scale a byte count down to the unit at `index`.
fn scale(bytes: u64, index: usize) -> f64 {
    let divisor = 1024_f64.powi(i32::try_from(index).unwrap_or(i32::MAX));
    bytes as f64 / divisor
}

/// Index of the largest unit keeping `bytes / 1024^i` at or above 1,
/// clamped to the known unit table.
///
/// The caller guarantees `bytes > 0`. Values beyond the table (past YB)
/// clamp to the largest known unit; unreachable for `u64` input.
fn auto_index(bytes: u64) -> usize {
    let exponent = (bytes as f64).ln() / 1024_f64.ln();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = exponent.floor() as usize;

    index.min(UNITS.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_always_0b() {
        assert_eq!(format_bytes(0, SizeUnit::Auto, 2), "0B");
        assert_eq!(format_bytes(0, SizeUnit::Kb, 5), "0B");
        assert_eq!(format_bytes(0, SizeUnit::Pb, 0), "0B");
    }

    #[test]
    fn test_fixed_unit_keeps_decimals() {
        assert_eq!(format_bytes(1536, SizeUnit::Kb, 2), "1.50KB");
        assert_eq!(format_bytes(1024, SizeUnit::Kb, 0), "1KB");
        assert_eq!(format_bytes(500, SizeUnit::B, 0), "500B");
        assert_eq!(format_bytes(1_048_576, SizeUnit::Mb, 2), "1.00MB");
        assert_eq!(format_bytes(1_048_576, SizeUnit::Kb, 0), "1024KB");
        assert_eq!(format_bytes(1_073_741_824, SizeUnit::Gb, 1), "1.0GB");
    }

    #[test]
    fn test_fixed_unit_small_values() {
        // A small count shown in a large unit rounds toward zero digits
        assert_eq!(format_bytes(512, SizeUnit::Kb, 2), "0.50KB");
        assert_eq!(format_bytes(1, SizeUnit::Mb, 2), "0.00MB");
    }

    #[test]
    fn test_auto_unit_selection() {
        assert_eq!(format_bytes(13, SizeUnit::Auto, 2), "13B");
        assert_eq!(format_bytes(1023, SizeUnit::Auto, 2), "1023B");
        assert_eq!(format_bytes(1024, SizeUnit::Auto, 2), "1KB");
        assert_eq!(format_bytes(1_048_576, SizeUnit::Auto, 2), "1MB");
        assert_eq!(format_bytes(1_073_741_824, SizeUnit::Auto, 2), "1GB");
        assert_eq!(
            format_bytes(1_125_899_906_842_624, SizeUnit::Auto, 2),
            "1PB"
        );
        assert_eq!(format_bytes(1024_u64.pow(6), SizeUnit::Auto, 2), "1EB");
    }

    #[test]
    fn test_auto_strips_trailing_zeros() {
        assert_eq!(format_bytes(1536, SizeUnit::Auto, 2), "1.5KB");
        assert_eq!(format_bytes(1280, SizeUnit::Auto, 2), "1.25KB");
        assert_eq!(format_bytes(2048, SizeUnit::Auto, 4), "2KB");
    }

    #[test]
    fn test_negative_decimals_clamp_to_zero() {
        assert_eq!(format_bytes(1536, SizeUnit::Kb, -3), "2KB");
        assert_eq!(format_bytes(1536, SizeUnit::Auto, -1), "2KB");
        assert_eq!(format_bytes(100, SizeUnit::B, -5), "100B");
    }

    #[test]
    fn test_numeric_prefix_parses_back() {
        let decimals = 2;

        for bytes in [1_u64, 999, 1000, 1024, 123_456, 987_654_321] {
            let formatted = format_bytes(bytes, SizeUnit::Auto, decimals);
            let index = auto_index(bytes);
            let suffix = UNITS[index];

            assert!(formatted.ends_with(suffix), "{formatted} lacks {suffix}");

            let prefix = formatted.trim_end_matches(suffix);
            let parsed: f64 = prefix.parse().expect("numeric prefix");
            let tolerance = 0.005 * 1024_f64.powi(i32::try_from(index).unwrap()) * 1.001;

            assert!(
                (parsed * 1024_f64.powi(i32::try_from(index).unwrap()) - bytes as f64).abs()
                    <= tolerance,
                "{formatted} does not round back to {bytes}"
            );
        }
    }
}
