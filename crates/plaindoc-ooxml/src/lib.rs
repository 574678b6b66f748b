//! # plaindoc-ooxml
//!
//! DOCX (WordprocessingML) generation for plaindoc.
//!
//! This crate provides functionality to:
//! - Serialize styled blocks into a complete, template-free DOCX package
//! - Read a package back into memory for inspection
//!
//! ## Example: Writing a Document
//!
//! ```
//! use std::io::Cursor;
//! use plaindoc_core::{assemble_document, Theme};
//! use plaindoc_ooxml::{DocxWriter, OoxmlArchive};
//!
//! let theme = Theme::default();
//! let blocks = assemble_document("# Notes\n- first\n- second", &theme);
//! let bytes = DocxWriter::new(&theme).generate(&blocks)?;
//!
//! let archive = OoxmlArchive::from_reader(Cursor::new(bytes))?;
//! assert!(archive.contains("word/styles.xml"));
//! # Ok::<(), plaindoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod error;
pub mod writer;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
