//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Reasons a single report line is rejected.
///
/// These never escape `parse_report`: a rejected line is simply skipped.
/// They are public so the per-line helpers can be tested directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line does not match the data row shape")]
    MalformedLine,

    #[error("Unrecognized unit suffix: {0}")]
    UnrecognizedUnitSuffix(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
