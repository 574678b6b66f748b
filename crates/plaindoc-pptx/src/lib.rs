//! # plaindoc-pptx
//!
//! PowerPoint (PPTX) generation for plaindoc slides.
//!
//! Slides come from [`plaindoc_core::assemble_slides`] already laid out: every
//! title and content line carries an absolute text frame. This crate turns
//! them into a self-contained PresentationML package with one master, one
//! blank layout, and a gradient background on every slide.
//!
//! ## Example
//!
//! ```rust,ignore
//! use plaindoc_core::{assemble_slides, Theme};
//! use plaindoc_pptx::PptxWriter;
//!
//! let theme = Theme::default();
//! let mut writer = PptxWriter::new(&theme).with_title("Kickoff");
//! writer.add_slides(assemble_slides("Welcome\n- agenda", &theme));
//!
//! let pptx_bytes = writer.generate()?;
//! std::fs::write("kickoff.pptx", pptx_bytes)?;
//! ```

pub mod error;
pub mod writer;

// Re-exports
pub use error::{PptxError, Result};
pub use writer::PptxWriter;

/// PPTX-related constants
pub mod constants {
    /// Widescreen 16:9 slide width in EMU (13.333" width)
    pub const WIDESCREEN_SLIDE_WIDTH_EMU: i64 = 12_192_000;

    /// Widescreen 16:9 slide height in EMU (7.5" height)
    pub const WIDESCREEN_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// Smallest slide edge PowerPoint accepts (1 inch)
    pub const MIN_SLIDE_EDGE_EMU: i64 = 914_400;

    /// Largest slide edge PowerPoint accepts (56 inches)
    pub const MAX_SLIDE_EDGE_EMU: i64 = 51_206_400;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// DrawingML font sizes are hundredths of a point
    pub const FONT_SIZE_SCALE: u32 = 100;

    /// DrawingML angles are 60000ths of a degree
    pub const ANGLE_SCALE: u32 = 60_000;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Package relationships namespace
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Convert inches to EMU, rounding to the nearest unit
    pub fn emu(inches: f64) -> i64 {
        (inches * EMU_PER_INCH as f64).round() as i64
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
