//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! currently the byte count formatter used by the table and JSON renderers.

pub mod format;

pub use format::format_bytes;
