//! plaindoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for plaindoc:
//! - Docx / Pptx / Pdf: Convert a plain text file to one artifact
//! - All: Produce every artifact at once
//! - Segments: Inspect how a file is classified
//!
//! # Library Usage
//!
//! ```ignore
//! use plaindoc_cli::{generate_document, DirectorySink};
//! use plaindoc_core::Theme;
//!
//! let mut sink = DirectorySink::new("out");
//! generate_document("# Title\nBody", "report", &Theme::default(), &mut sink)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Word document next to the input
//! plaindoc docx notes.txt
//!
//! # All artifacts into dist/ with a custom theme
//! plaindoc all notes.txt --out-dir dist --theme brand.toml
//!
//! # Show the classified segments
//! plaindoc segments notes.txt
//! ```

mod app;
pub mod generate;
pub mod sink;

pub use app::{
    artifact_base_name, generate_command, resolve_theme, run_cli, segments_command, OutputArgs,
    THEME_FILE_NAME,
};
pub use generate::{generate, generate_document, generate_paged_output, generate_slides, Format};
pub use sink::{ArtifactSink, DirectorySink, MemorySink};
