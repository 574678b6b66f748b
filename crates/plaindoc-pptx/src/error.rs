//! Error types for PPTX generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur during PPTX generation
#[derive(Error, Debug)]
pub enum PptxError {
    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Slide size outside what PowerPoint accepts
    #[error("Invalid slide size {width}x{height} EMU: {reason}")]
    InvalidSlideSize {
        width: i64,
        height: i64,
        reason: String,
    },
}

impl PptxError {
    /// Create an invalid slide size error
    pub fn invalid_slide_size(width: i64, height: i64, reason: impl Into<String>) -> Self {
        Self::InvalidSlideSize {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZipError(_) => "PPTX001",
            Self::IoError(_) => "PPTX002",
            Self::InvalidSlideSize { .. } => "PPTX003",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PptxError::invalid_slide_size(0, 0, "too small").code(),
            "PPTX003"
        );
        assert_eq!(
            PptxError::from(std::io::Error::other("broken pipe")).code(),
            "PPTX002"
        );
    }

    #[test]
    fn test_error_display() {
        let err = PptxError::invalid_slide_size(100, 200, "below 1 inch");
        let msg = err.to_string();
        assert!(msg.contains("100x200"));
        assert!(msg.contains("below 1 inch"));
    }
}
