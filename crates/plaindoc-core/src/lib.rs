//! plaindoc-core - Plain text in, styled documents and slides out
//!
//! Core library for plaindoc: interprets loosely delimited, line-oriented
//! text and maps it onto theme-styled output models.
//!
//! - [`segment`] classifies lines into headings, lists, tables and text
//! - [`document`] turns segments into styled word-processor blocks
//! - [`slides`] splits text into laid-out slides
//! - [`theme`] holds the font, palette and spacing shared by both
//! - [`xml`] escapes text for the package writers
//!
//! # Example
//!
//! ```
//! use plaindoc_core::{assemble_document, assemble_slides, StyledBlock, Theme};
//!
//! let theme = Theme::default();
//! let blocks = assemble_document("# Report\nAll good.", &theme);
//! assert!(matches!(blocks[0], StyledBlock::Heading(_)));
//!
//! let slides = assemble_slides("Welcome\n- first\n\nThanks", &theme);
//! assert_eq!(slides.len(), 2);
//! ```

pub mod document;
pub mod error;
pub mod segment;
pub mod slides;
pub mod theme;
pub mod xml;

// Re-export main types and functions
pub use document::{
    assemble_document, assemble_segments, StyledBlock, StyledHeading, StyledListItem,
    StyledParagraph, StyledRun, StyledTable,
};
pub use error::{Result, ThemeError};
pub use segment::{segment, Segment, SegmentKind};
pub use slides::{assemble_slides, Slide, SlideLine, TextFrame};
pub use theme::{Alignment, Color, Theme};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
