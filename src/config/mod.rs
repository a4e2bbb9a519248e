//! Configuration structures and the persistent config file.
//!
//! This module defines the effective run options ([`GaugeOptions`],
//! [`ReportOptions`]) and the optional TOML config file whose values act
//! as defaults underneath CLI arguments (layered config: CLI argument >
//! config file > hardcoded default).

pub mod file;
pub mod options;

pub use file::FileConfig;
pub use options::{GaugeOptions, ReportOptions, SizeUnit, parse_limit};
