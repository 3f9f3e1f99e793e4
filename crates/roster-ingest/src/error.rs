//! Error types for survey spreadsheet ingestion.

use std::path::PathBuf;

use roster_model::ModelError;
use thiserror::Error;

/// Failures that abort a run before any record is processed.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The path does not point to an existing file.
    #[error("source document not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be opened for reading.
    #[error("cannot open {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable spreadsheet.
    #[error("{path} is not a spreadsheet file: {message}")]
    UnsupportedFormat { path: PathBuf, message: String },

    /// The workbook has no worksheet or no header row.
    #[error("spreadsheet is empty: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// A required survey column is absent from the header row.
    #[error("invalid survey layout in {path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
