//! Error types for report loading and decode table refresh.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("report file {} is not valid UTF-8 or UTF-16 text", .0.display())]
    EncodingInvalid(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// The file exists on disk, even if it could not be parsed.
    pub fn file_found(&self) -> bool {
        !matches!(self, ReportError::FileNotFound(_))
    }
}

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("remote table has no version line")]
    MissingVersion,
}
