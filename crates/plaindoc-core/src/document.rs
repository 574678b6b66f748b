//! Document Assembler
//!
//! Maps segments onto an ordered sequence of theme-styled [`StyledBlock`]s
//! ready for a word-processor serializer:
//!
//! - heading: one [`StyledHeading`] whose rank is the segment's level
//! - text: one [`StyledParagraph`] per line
//! - list: one [`StyledListItem`] per item
//! - table: one [`StyledTable`], with the flat cell list reflowed into a
//!   square-ish grid (see [`table_grid`])

use tracing::debug;

use crate::segment::{segment, Segment};
use crate::theme::{Alignment, Color, Spacing, Theme};

/// Character formatting for one run of text. Sizes are in half-points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStyle {
    pub font: String,
    pub size: u32,
    pub color: Color,
    pub bold: bool,
}

/// A run of uniformly formatted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledHeading {
    pub text: String,
    /// 1 (largest) to 3
    pub rank: u8,
    pub style: RunStyle,
    pub spacing: Spacing,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledParagraph {
    pub run: StyledRun,
    pub spacing: Spacing,
    pub first_line_indent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledListItem {
    /// The bullet glyph, styled separately from the item text
    pub bullet: StyledRun,
    pub run: StyledRun,
    pub spacing: Spacing,
    pub left_indent: u32,
}

/// Single-line border drawn on every side of every cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBorder {
    /// Width in eighths of a point
    pub size: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledTable {
    /// Row-chunked cells; the last row may be shorter than `column_count`
    pub rows: Vec<Vec<StyledRun>>,
    pub column_count: usize,
    pub cell_margin: u32,
    pub cell_line_spacing: u32,
    pub table_margin: u32,
    pub border: CellBorder,
}

/// A styled unit ready for serialization into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledBlock {
    Heading(StyledHeading),
    Paragraph(StyledParagraph),
    ListItem(StyledListItem),
    Table(StyledTable),
}

impl StyledBlock {
    /// Plain text of the block; table cells are joined with tabs and rows
    /// with newlines
    pub fn text(&self) -> String {
        match self {
            StyledBlock::Heading(h) => h.text.clone(),
            StyledBlock::Paragraph(p) => p.run.text.clone(),
            StyledBlock::ListItem(item) => item.run.text.clone(),
            StyledBlock::Table(table) => table
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.text.as_str())
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Column count for a flat cell list: `ceil(sqrt(n))`
pub fn column_count(cells: usize) -> usize {
    (cells as f64).sqrt().ceil() as usize
}

/// Reflow a flat cell list into rows of [`column_count`] cells.
///
/// Row boundaries from the source are not known, so the grid is only
/// guaranteed to be rectangular up to the last, possibly short, row.
pub fn table_grid<T: Clone>(cells: &[T]) -> (usize, Vec<Vec<T>>) {
    let columns = column_count(cells.len());
    if columns == 0 {
        return (0, Vec::new());
    }
    let rows = cells.chunks(columns).map(<[T]>::to_vec).collect();
    (columns, rows)
}

/// Applies the theme to individual segments
struct Styler<'t> {
    theme: &'t Theme,
}

impl<'t> Styler<'t> {
    fn run_style(&self, size: u32, color: &Color, bold: bool) -> RunStyle {
        RunStyle {
            font: self.theme.font.clone(),
            size,
            color: color.clone(),
            bold,
        }
    }

    fn body_run(&self, text: &str) -> StyledRun {
        StyledRun {
            text: text.to_string(),
            style: self.run_style(
                self.theme.document.body_size,
                &self.theme.palette.text,
                false,
            ),
        }
    }

    fn heading(&self, level: u8, title: &str) -> StyledHeading {
        let doc = &self.theme.document;
        let rank = level.clamp(1, 3);
        StyledHeading {
            text: title.to_string(),
            rank,
            style: self.run_style(doc.heading_size(rank), &self.theme.palette.primary, true),
            spacing: doc.heading_spacing,
            alignment: if rank == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            },
        }
    }

    fn paragraph(&self, line: &str) -> StyledParagraph {
        StyledParagraph {
            run: self.body_run(line),
            spacing: self.theme.document.body_spacing,
            first_line_indent: self.theme.document.first_line_indent,
        }
    }

    fn list_item(&self, item: &str) -> StyledListItem {
        let doc = &self.theme.document;
        StyledListItem {
            bullet: StyledRun {
                text: doc.bullet.clone(),
                style: self.run_style(doc.body_size, &self.theme.palette.accent, false),
            },
            run: self.body_run(item),
            spacing: doc.body_spacing,
            left_indent: doc.list_indent,
        }
    }

    fn table(&self, cells: &[String]) -> StyledTable {
        let doc = &self.theme.document;
        let (column_count, rows) = table_grid(cells);
        StyledTable {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| self.body_run(cell)).collect())
                .collect(),
            column_count,
            cell_margin: doc.cell_margin,
            cell_line_spacing: doc.cell_line_spacing,
            table_margin: doc.table_margin,
            border: CellBorder {
                size: doc.border_size,
                color: self.theme.palette.secondary.clone(),
            },
        }
    }
}

/// Style an already segmented document
pub fn assemble_segments(segments: &[Segment], theme: &Theme) -> Vec<StyledBlock> {
    let styler = Styler { theme };
    let mut blocks = Vec::new();

    for segment in segments {
        match segment {
            Segment::Heading { level, title } => {
                blocks.push(StyledBlock::Heading(styler.heading(*level, title)));
            }
            Segment::Text { lines } => {
                blocks.extend(
                    lines
                        .iter()
                        .map(|line| StyledBlock::Paragraph(styler.paragraph(line))),
                );
            }
            Segment::List { lines } => {
                blocks.extend(
                    lines
                        .iter()
                        .map(|item| StyledBlock::ListItem(styler.list_item(item))),
                );
            }
            Segment::Table { lines } => {
                blocks.push(StyledBlock::Table(styler.table(lines)));
            }
        }
    }

    blocks
}

/// Segment raw content and style it into document blocks.
///
/// Empty or blank input yields no blocks.
pub fn assemble_document(content: &str, theme: &Theme) -> Vec<StyledBlock> {
    let blocks = assemble_segments(&segment(content), theme);
    debug!(blocks = blocks.len(), "assembled document");
    blocks
}
