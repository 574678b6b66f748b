//! Error types for theme configuration

use thiserror::Error;

/// Errors that can occur while loading or validating a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Error reading the theme file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the theme TOML
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A palette entry is not a six-digit hex color
    #[error("Invalid color '{value}': expected six hex digits such as 1B2A4A")]
    InvalidColor { value: String },
}

impl ThemeError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
