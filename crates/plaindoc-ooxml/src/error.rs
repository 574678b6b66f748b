//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur during OOXML operations
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required part not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),
}

impl OoxmlError {
    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Archive(_) => "DOCX001",
            Self::Io(_) => "DOCX002",
            Self::MissingFile(_) => "DOCX003",
        }
    }
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
