//! Error types for bigram-stats-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during bigram analysis.
///
/// Empty or single-word input is not an error; it yields an empty
/// frequency map.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input handed to an untyped boundary was not text.
    #[error("input must be a string path or plain text, got {found}")]
    InvalidInputKind {
        /// Kind of value that was received instead (e.g. "number").
        found: &'static str,
    },

    /// A candidate file exists but could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// The file that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A candidate file exists but exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// The file that was rejected.
        path: Utf8PathBuf,
        /// Size of the file on disk.
        size: u64,
        /// Configured maximum in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
