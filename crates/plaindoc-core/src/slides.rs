//! Slide Assembler
//!
//! Splits raw content into slide units on blank-line separators and lays
//! each unit out on a fixed wide canvas:
//!
//! - the first line is the title, centered across the top band
//! - `- ` lines become left-aligned bullets, other lines centered statements
//! - lines stack top to bottom from a fixed cursor, with no overflow check
//!
//! This path does not use the Content Segmenter.

use tracing::debug;

use crate::theme::{Alignment, Color, Theme};

/// Marker that turns a content line into a bullet
pub const BULLET_MARKER: &str = "- ";

/// An absolutely positioned text box. Lengths are inches, size is points.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font: String,
    pub font_size: u32,
    pub bold: bool,
    pub color: Color,
    pub alignment: Alignment,
}

/// Linear two-stop background gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
    /// Degrees
    pub angle: u32,
}

/// One content line of a slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLine {
    /// Text with the bullet marker stripped
    pub text: String,
    pub bulleted: bool,
    pub frame: TextFrame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub title_frame: TextFrame,
    pub lines: Vec<SlideLine>,
    pub background: Gradient,
}

/// Split content into slide units on `"\n\n"`, dropping blank units
pub fn slide_units(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .filter(|unit| !unit.trim().is_empty())
        .collect()
}

/// Split a unit into its title line and trimmed, non-empty content lines.
///
/// The title line itself is not trimmed.
fn split_unit<'a>(unit: &'a str, title_prefix: &str) -> (&'a str, Vec<&'a str>) {
    let mut lines = unit.split('\n');
    let title = lines.next().unwrap_or_default();
    let title = if title_prefix.is_empty() {
        title
    } else {
        title.strip_prefix(title_prefix).unwrap_or(title)
    };
    let content = lines.map(str::trim).filter(|line| !line.is_empty()).collect();
    (title, content)
}

fn build_slide(unit: &str, theme: &Theme) -> Slide {
    let style = &theme.slides;
    let (title, content) = split_unit(unit, &style.title_prefix);

    let frame = |y: f64, height: f64, font_size: u32, bold: bool, alignment: Alignment| TextFrame {
        x: style.margin_x,
        y,
        width: style.box_width(),
        height,
        font: theme.font.clone(),
        font_size,
        bold,
        color: style.text_color.clone(),
        alignment,
    };

    let mut cursor = style.content_top;
    let mut lines = Vec::with_capacity(content.len());
    for line in content {
        let (text, bulleted) = match line.strip_prefix(BULLET_MARKER) {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        let (font_size, alignment) = if bulleted {
            (style.bullet_size, Alignment::Left)
        } else {
            (style.statement_size, Alignment::Center)
        };
        lines.push(SlideLine {
            text: text.to_string(),
            bulleted,
            frame: frame(cursor, style.line_height, font_size, false, alignment),
        });
        cursor += style.line_step;
    }

    Slide {
        title: title.to_string(),
        title_frame: frame(
            style.title_y,
            style.title_height,
            style.title_size,
            true,
            Alignment::Center,
        ),
        lines,
        background: Gradient {
            from: theme.palette.primary.clone(),
            to: theme.palette.secondary.clone(),
            angle: style.gradient_angle,
        },
    }
}

/// Split raw content into laid-out slides.
///
/// Empty or blank input yields no slides; a unit with only a title line
/// yields a slide with no content lines.
pub fn assemble_slides(content: &str, theme: &Theme) -> Vec<Slide> {
    let slides: Vec<Slide> = slide_units(content)
        .into_iter()
        .map(|unit| build_slide(unit, theme))
        .collect();
    debug!(slides = slides.len(), "assembled slides");
    slides
}
