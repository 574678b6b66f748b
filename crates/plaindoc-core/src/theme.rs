//! Visual theme shared by the document and slide assemblers.
//!
//! A [`Theme`] is one immutable value holding the display font, the color
//! palette, and the spacing constants for both output kinds. The default is
//! the built-in navy palette with Century Gothic; any subset of it can be
//! overridden from a TOML file:
//!
//! ```toml
//! font = "Calibri"
//!
//! [palette]
//! primary = "0B3D2E"
//!
//! [slides]
//! title_prefix = "Slide "
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Font used when the theme does not name one
pub const DEFAULT_FONT: &str = "Century Gothic";

/// Width of the 16:9 widescreen slide in inches (13.33 in, 12192000 EMU)
pub const WIDESCREEN_WIDTH: f64 = 40.0 / 3.0;

/// An RGB color as six uppercase hex digits, without a leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a color from `RRGGBB` or `#RRGGBB`
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(hex.to_ascii_uppercase()))
        } else {
            Err(ThemeError::invalid_color(value))
        }
    }

    /// Built-in colors are known to be valid
    fn known(hex: &str) -> Self {
        Self(hex.to_string())
    }

    /// The hex digits, e.g. `1B2A4A`
    pub fn hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
}

/// Paragraph spacing in twentieths of a point (twips)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
    /// Line pitch in 240ths of a line (`360` is one and a half lines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// The six-color palette.
///
/// Only `primary`, `secondary`, `accent` and `text` are consumed by block and
/// slide styling; `success` and `warning` are carried into the generated
/// package themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Deep navy blue
    pub primary: Color,
    /// Rich royal blue
    pub secondary: Color,
    /// Bright blue
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    /// Dark gray body text
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::known("1B2A4A"),
            secondary: Color::known("2C3E67"),
            accent: Color::known("4A90E2"),
            success: Color::known("27AE60"),
            warning: Color::known("F39C12"),
            text: Color::known("2D3748"),
        }
    }
}

/// Word-processor styling constants. Sizes are in half-points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    /// Heading sizes for ranks 1, 2 and 3
    pub heading_sizes: [u32; 3],
    pub heading_spacing: Spacing,
    /// Shared by paragraphs, list items and table cells
    pub body_size: u32,
    pub body_spacing: Spacing,
    pub first_line_indent: u32,
    pub list_indent: u32,
    /// Glyph run placed before every list item
    pub bullet: String,
    pub cell_margin: u32,
    pub cell_line_spacing: u32,
    pub table_margin: u32,
    /// Cell border width in eighths of a point
    pub border_size: u32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            heading_sizes: [32, 28, 24],
            heading_spacing: Spacing {
                before: 400,
                after: 200,
                line: None,
            },
            body_size: 24,
            body_spacing: Spacing {
                before: 120,
                after: 120,
                line: Some(360),
            },
            first_line_indent: 720,
            list_indent: 720,
            bullet: "\u{2022} ".to_string(),
            cell_margin: 120,
            cell_line_spacing: 360,
            table_margin: 120,
            border_size: 1,
        }
    }
}

impl DocumentStyle {
    /// Size for a heading rank; ranks past 3 use the rank 3 size
    pub fn heading_size(&self, rank: u8) -> u32 {
        let index = usize::from(rank.clamp(1, 3)) - 1;
        self.heading_sizes[index]
    }
}

/// Slide styling constants. Lengths are in inches, sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyle {
    /// Slide canvas width, also the base for `box_width_percent`
    pub width: f64,
    pub height: f64,
    /// Left offset of every text box
    pub margin_x: f64,
    /// Text box width as a percentage of the slide width
    pub box_width_percent: f64,
    pub title_y: f64,
    pub title_height: f64,
    pub title_size: u32,
    /// Vertical position of the first content line
    pub content_top: f64,
    pub line_height: f64,
    /// Cursor advance after each content line
    pub line_step: f64,
    pub bullet_size: u32,
    pub statement_size: u32,
    pub text_color: Color,
    /// Background gradient angle in degrees
    pub gradient_angle: u32,
    /// Placeholder prefix removed from the start of slide titles
    pub title_prefix: String,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            width: WIDESCREEN_WIDTH,
            height: 7.5,
            margin_x: 0.5,
            box_width_percent: 95.0,
            title_y: 0.5,
            title_height: 1.5,
            title_size: 44,
            content_top: 2.3,
            line_height: 0.7,
            line_step: 0.8,
            bullet_size: 24,
            statement_size: 28,
            text_color: Color::known("FFFFFF"),
            gradient_angle: 45,
            title_prefix: "Diapositiva ".to_string(),
        }
    }
}

impl SlideStyle {
    /// Width of every text box in inches
    pub fn box_width(&self) -> f64 {
        self.width * self.box_width_percent / 100.0
    }
}

/// Font, palette and spacing applied to every generated artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font: String,
    pub palette: Palette,
    pub document: DocumentStyle,
    pub slides: SlideStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            palette: Palette::default(),
            document: DocumentStyle::default(),
            slides: SlideStyle::default(),
        }
    }
}

impl Theme {
    /// Parse a theme from TOML; missing keys keep their defaults
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a theme from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.font, "Century Gothic");
        assert_eq!(theme.palette.primary.hex(), "1B2A4A");
        assert_eq!(theme.palette.secondary.hex(), "2C3E67");
        assert_eq!(theme.palette.accent.hex(), "4A90E2");
        assert_eq!(theme.palette.text.hex(), "2D3748");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#ff00aa").unwrap().hex(), "FF00AA");
        assert_eq!(Color::parse("1b2a4a").unwrap().hex(), "1B2A4A");
        assert!(Color::parse("navy").is_err());
        assert!(Color::parse("12345").is_err());
        assert!(Color::parse("#1234567").is_err());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_toml_str(
            r##"
font = "Calibri"

[palette]
primary = "#0b3d2e"

[slides]
title_prefix = "Slide "
"##,
        )
        .unwrap();

        assert_eq!(theme.font, "Calibri");
        assert_eq!(theme.palette.primary.hex(), "0B3D2E");
        // Untouched entries keep their defaults
        assert_eq!(theme.palette.secondary.hex(), "2C3E67");
        assert_eq!(theme.slides.title_prefix, "Slide ");
        assert_eq!(theme.slides.title_size, 44);
        assert_eq!(theme.document, DocumentStyle::default());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Theme::from_toml_str("[palette]\naccent = \"blue\"").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_heading_size_by_rank() {
        let style = DocumentStyle::default();
        assert_eq!(style.heading_size(1), 32);
        assert_eq!(style.heading_size(2), 28);
        assert_eq!(style.heading_size(3), 24);
        assert_eq!(style.heading_size(9), 24);
    }

    #[test]
    fn test_box_width() {
        let style = SlideStyle::default();
        assert!((style.box_width() - 12.666_666_666_666_666).abs() < 1e-9);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[document]\nbody_size = 22").unwrap();

        let theme = Theme::load(file.path()).unwrap();
        assert_eq!(theme.document.body_size, 22);
        assert_eq!(theme.document.heading_sizes, [32, 28, 24]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load("/nonexistent/plaindoc.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
