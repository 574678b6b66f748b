//! Artifact generation
//!
//! Each entry point runs one pipeline from raw text to a named artifact.
//! Serialization finishes in memory before the sink is called, so a failed
//! pipeline never leaves a partial file behind.

use anyhow::{Context, Result};
use tracing::info;

use plaindoc_core::{assemble_document, assemble_slides, Theme};
use plaindoc_ooxml::DocxWriter;
use plaindoc_pptx::PptxWriter;

use crate::sink::ArtifactSink;

/// Artifact kinds the CLI can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Word-processor document
    Docx,
    /// Slide deck
    Pptx,
    /// Paged output placeholder (raw text)
    Pdf,
}

impl Format {
    /// All formats, in generation order
    pub const ALL: [Format; 3] = [Format::Docx, Format::Pptx, Format::Pdf];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Docx => "docx",
            Format::Pptx => "pptx",
            Format::Pdf => plaindoc_pdf::EXTENSION,
        }
    }

    /// Artifact name for a base file name, e.g. `report.docx`
    pub fn artifact_name(self, filename: &str) -> String {
        format!("{}.{}", filename, self.extension())
    }
}

/// Segment, style and serialize `content`, saving `<filename>.docx`
pub fn generate_document(
    content: &str,
    filename: &str,
    theme: &Theme,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    let blocks = assemble_document(content, theme);
    let bytes = DocxWriter::new(theme)
        .with_title(filename)
        .generate(&blocks)
        .context("Failed to serialize DOCX")?;

    let name = Format::Docx.artifact_name(filename);
    sink.save(&name, &bytes)?;
    info!(artifact = %name, blocks = blocks.len(), "generated document");
    Ok(())
}

/// Split `content` into slides and save `<filename>.pptx`
pub fn generate_slides(
    content: &str,
    filename: &str,
    theme: &Theme,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    let slides = assemble_slides(content, theme);
    let count = slides.len();

    let mut writer = PptxWriter::new(theme).with_title(filename);
    writer.add_slides(slides);
    let bytes = writer.generate().context("Failed to serialize PPTX")?;

    let name = Format::Pptx.artifact_name(filename);
    sink.save(&name, &bytes)?;
    info!(artifact = %name, slides = count, "generated slides");
    Ok(())
}

/// Save the raw text as `<filename>.pdf`
pub fn generate_paged_output(
    content: &str,
    filename: &str,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    let bytes = plaindoc_pdf::render_placeholder(content);

    let name = Format::Pdf.artifact_name(filename);
    sink.save(&name, &bytes)?;
    info!(artifact = %name, "generated paged output placeholder");
    Ok(())
}

/// Run the pipeline for one format
pub fn generate(
    format: Format,
    content: &str,
    filename: &str,
    theme: &Theme,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    match format {
        Format::Docx => generate_document(content, filename, theme, sink),
        Format::Pptx => generate_slides(content, filename, theme, sink),
        Format::Pdf => generate_paged_output(content, filename, sink),
    }
}
