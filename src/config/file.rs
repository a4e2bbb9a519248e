//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/file-gauge/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [gauge]
//! minify = true
//! limit = 50.0            # KB (1 KB = 1024 bytes)
//! ignore = "**/*.min.js"
//!
//! [report]
//! format = "KB"           # auto, B, KB, MB, GB, TB, PB
//! decimals = 1
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in
/// the config file and apply layered configuration (CLI > config file >
/// defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Measurement options
    #[serde(default)]
    pub gauge: FileGaugeConfig,

    /// Rendering options
    #[serde(default)]
    pub report: FileReportConfig,
}

/// Measurement options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileGaugeConfig {
    /// Whether to minify JavaScript sources before measuring
    pub minify: Option<bool>,

    /// Size budget in KB (1024 bytes)
    pub limit: Option<f64>,

    /// Glob pattern of paths to exclude from the match set
    pub ignore: Option<String>,
}

/// Rendering options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileReportConfig {
    /// Display unit name (`"auto"`, `"B"`, `"KB"`, `"MB"`, `"GB"`, `"TB"`, `"PB"`)
    pub format: Option<String>,

    /// Number of decimal places to show
    pub decimals: Option<i32>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/file-gauge/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux/macOS, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("file-gauge").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration. If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.gauge.minify.is_none());
        assert!(config.gauge.limit.is_none());
        assert!(config.gauge.ignore.is_none());
        assert!(config.report.format.is_none());
        assert!(config.report.decimals.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
[gauge]
minify = true
limit = 50.0
ignore = "**/*.min.js"

[report]
format = "KB"
decimals = 1
"#,
        )
        .expect("valid config");

        assert_eq!(config.gauge.minify, Some(true));
        assert_eq!(config.gauge.limit, Some(50.0));
        assert_eq!(config.gauge.ignore.as_deref(), Some("**/*.min.js"));
        assert_eq!(config.report.format.as_deref(), Some("KB"));
        assert_eq!(config.report.decimals, Some(1));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str("[report]\ndecimals = 0\n").expect("valid config");

        assert!(config.gauge.minify.is_none());
        assert_eq!(config.report.decimals, Some(0));
        assert!(config.report.format.is_none());
    }
}
