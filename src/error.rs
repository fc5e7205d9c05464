//! Error types for loading measurements and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a comparison run.
///
/// A missing measurement file is not an error; it surfaces as `None` from the
/// loader and as `n/a` in every output.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read measurement file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed measurement file {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create results directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize JSON summary: {0}")]
    Json(#[source] serde_json::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, CompareError>;
