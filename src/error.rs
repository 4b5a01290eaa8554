//! Error types.
//!
//! Construction itself never fails: unplaceable meetings are reported in
//! the statistics. Errors come only from loading instances and writing
//! reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure to obtain a usable problem instance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The instance file could not be read.
    #[error("failed to read instance {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The instance is not valid JSON.
    #[error("failed to parse instance: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON does not have the expected shape.
    #[error("malformed instance: {0}")]
    Format(String),

    /// The instance parsed but is structurally inconsistent.
    #[error("instance failed validation ({} error(s)): {}", .0.len(), summarize(.0))]
    Invalid(Vec<ValidationError>),
}

/// Failure to write a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the sink failed.
    #[error("I/O error while writing report: {0}")]
    Io(#[from] io::Error),

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
