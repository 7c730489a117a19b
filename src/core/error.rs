//! Error types shared by the scanner glue
//!
//! The scanner itself never fails; everything here comes from the file
//! selection, reading and report-writing layers around it.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::model::ReportError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {}", path.display())]
    UnsupportedType { path: PathBuf },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (use --lossy to decode it anyway)", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report {} would overwrite its source file", path.display())]
    ReportCollision { path: PathBuf },

    #[error("Invalid input. Please enter an integer number.")]
    InvalidCount,

    #[error("input ended before all file paths were entered")]
    InputClosed,
}

impl ExtractError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            ExtractError::NotFound { .. } => "NOT_FOUND",
            ExtractError::Read { .. } => "READ_FAILED",
            ExtractError::InvalidEncoding { .. } => "INVALID_ENCODING",
            ExtractError::Write { .. } => "WRITE_FAILED",
            ExtractError::ReportCollision { .. } => "REPORT_COLLISION",
            ExtractError::InvalidCount => "INVALID_COUNT",
            ExtractError::InputClosed => "INPUT_CLOSED",
        }
    }

    /// The file this error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExtractError::UnsupportedType { path }
            | ExtractError::NotFound { path }
            | ExtractError::Read { path, .. }
            | ExtractError::InvalidEncoding { path }
            | ExtractError::Write { path, .. }
            | ExtractError::ReportCollision { path } => Some(path),
            ExtractError::InvalidCount | ExtractError::InputClosed => None,
        }
    }

    /// Convert into the serializable record embedded in result items
    pub fn to_report_error(&self) -> ReportError {
        ReportError::new(self.code(), self.to_string())
    }
}
