//! Error types for gauge runs.
//!
//! Every error here is fatal: the run stops at the first failure and no
//! report is printed. There is no skip-and-continue mode; callers that
//! asked for a measurement either get the full report or an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a gauge run.
#[derive(Error, Debug)]
pub enum GaugeError {
    /// The glob or ignore pattern itself is malformed.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern string
        pattern: String,
        /// Parse error reported by the glob engine
        #[source]
        source: glob::PatternError,
    },

    /// Glob expansion could not read a directory on the way to a match.
    #[error("Failed to expand glob: {source}")]
    Walk {
        /// Underlying traversal error, including the unreadable path
        #[source]
        source: glob::GlobError,
    },

    /// A matched file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The minifier rejected the input or produced no output.
    ///
    /// Minified size was explicitly requested, so reporting the
    /// unminified size instead would be misleading; there is no fallback.
    #[error("Could not minify {path}: {reason}")]
    Minify {
        /// Path of the file that failed to minify
        path: PathBuf,
        /// Human-readable failure reason from the minifier
        reason: String,
    },
}
