//! DOCX Writer
//!
//! This module writes a sequence of `plaindoc_core::StyledBlock`s to a
//! self-contained DOCX package. No template is needed: the package parts
//! (content types, relationships, styles, properties) are generated here and
//! every run carries its formatting directly.
//!
//! # Example
//!
//! ```ignore
//! use plaindoc_core::{assemble_document, Theme};
//! use plaindoc_ooxml::DocxWriter;
//!
//! let theme = Theme::default();
//! let blocks = assemble_document("# Hello\nWorld", &theme);
//! let bytes = DocxWriter::new(&theme).with_title("Hello").generate(&blocks)?;
//! std::fs::write("hello.docx", bytes)?;
//! ```

use tracing::debug;

use plaindoc_core::document::{
    CellBorder, RunStyle, StyledHeading, StyledListItem, StyledParagraph, StyledRun, StyledTable,
};
use plaindoc_core::theme::Spacing;
use plaindoc_core::xml::escape_text;
use plaindoc_core::{Alignment, StyledBlock, Theme};

use crate::archive::OoxmlArchive;
use crate::error::Result;

/// Letter page size in twips
const PAGE_WIDTH: u32 = 12_240;
const PAGE_HEIGHT: u32 = 15_840;
/// One inch margins on every side
const PAGE_MARGIN: u32 = 1_440;
/// Width available to tables
const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

const NS_WORDPROCESSING: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// DOCX Writer for generating DOCX files from styled blocks
pub struct DocxWriter {
    /// XML output buffer for word/document.xml
    output: String,
    /// Font used by the style definitions
    font: String,
    /// Document title (docProps/core.xml)
    title: Option<String>,
    /// Document author (docProps/core.xml)
    author: Option<String>,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl DocxWriter {
    /// Create a new DocxWriter whose style definitions follow the theme
    pub fn new(theme: &Theme) -> Self {
        Self {
            output: String::new(),
            font: theme.font.clone(),
            title: None,
            author: None,
        }
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Generate the DOCX as bytes.
    ///
    /// The whole package is built in memory; nothing is written anywhere if
    /// packaging fails.
    pub fn generate(&mut self, blocks: &[StyledBlock]) -> Result<Vec<u8>> {
        let mut archive = OoxmlArchive::new();

        archive.set_string("[Content_Types].xml", CONTENT_TYPES_XML);
        archive.set_string("_rels/.rels", ROOT_RELS_XML);
        archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS_XML);
        archive.set_string("docProps/app.xml", APP_XML);
        archive.set_string("docProps/core.xml", self.generate_core_xml());
        archive.set_string("word/styles.xml", self.generate_styles_xml());
        archive.set_string("word/document.xml", self.generate_document_xml(blocks));

        let bytes = archive.to_bytes()?;
        debug!(blocks = blocks.len(), bytes = bytes.len(), "generated DOCX");
        Ok(bytes)
    }

    /// Generate docProps/core.xml
    fn generate_core_xml(&self) -> String {
        let title = self.title.as_deref().unwrap_or("Document");
        let author = self.author.as_deref().unwrap_or("plaindoc");

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
</cp:coreProperties>"#,
            escape_text(title),
            escape_text(author),
            escape_text(author)
        )
    }

    /// Generate word/styles.xml with Normal and Heading1..3
    fn generate_styles_xml(&self) -> String {
        let font = escape_text(&self.font);
        let mut styles = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{NS_WORDPROCESSING}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault>
    <w:pPrDefault/>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
"#
        );

        for level in 1..=3 {
            styles.push_str(&format!(
                r#"  <w:style w:type="paragraph" w:styleId="Heading{level}">
    <w:name w:val="heading {level}"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:outlineLvl w:val="{}"/></w:pPr>
  </w:style>
"#,
                level - 1
            ));
        }

        styles.push_str(
            r#"  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:tblPr><w:tblInd w:w="0" w:type="dxa"/></w:tblPr>
  </w:style>
</w:styles>"#,
        );
        styles
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, blocks: &[StyledBlock]) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            "<w:document xmlns:w=\"{NS_WORDPROCESSING}\" xmlns:r=\"{NS_RELATIONSHIPS}\">\n"
        ));
        self.output.push_str("<w:body>\n");

        for block in blocks {
            self.generate_block(block);
        }

        // Word needs a paragraph between a trailing table and sectPr
        if matches!(blocks.last(), Some(StyledBlock::Table(_))) {
            self.output.push_str("<w:p/>\n");
        }

        self.output.push_str(&format!(
            "<w:sectPr><w:pgSz w:w=\"{PAGE_WIDTH}\" w:h=\"{PAGE_HEIGHT}\"/>\
             <w:pgMar w:top=\"{PAGE_MARGIN}\" w:right=\"{PAGE_MARGIN}\" w:bottom=\"{PAGE_MARGIN}\" \
             w:left=\"{PAGE_MARGIN}\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/></w:sectPr>\n"
        ));
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a single block
    fn generate_block(&mut self, block: &StyledBlock) {
        match block {
            StyledBlock::Heading(heading) => self.generate_heading(heading),
            StyledBlock::Paragraph(para) => self.generate_paragraph(para),
            StyledBlock::ListItem(item) => self.generate_list_item(item),
            StyledBlock::Table(table) => self.generate_table(table),
        }
    }

    /// Generate XML for a heading
    fn generate_heading(&mut self, heading: &StyledHeading) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str(&format!(
            "<w:pStyle w:val=\"Heading{}\"/>\n",
            heading.rank
        ));
        self.output.push_str(&spacing_xml(&heading.spacing));
        self.output.push_str(&alignment_xml(heading.alignment));
        self.output.push_str("</w:pPr>\n");
        self.output.push_str(&run_xml(&heading.text, &heading.style));
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a body paragraph
    fn generate_paragraph(&mut self, para: &StyledParagraph) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str(&spacing_xml(&para.spacing));
        self.output.push_str(&format!(
            "<w:ind w:firstLine=\"{}\"/>\n",
            para.first_line_indent
        ));
        self.output.push_str("</w:pPr>\n");
        self.output.push_str(&styled_run_xml(&para.run));
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a list item: bullet run, then text run
    fn generate_list_item(&mut self, item: &StyledListItem) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str(&spacing_xml(&item.spacing));
        self.output
            .push_str(&format!("<w:ind w:left=\"{}\"/>\n", item.left_indent));
        self.output.push_str("</w:pPr>\n");
        self.output.push_str(&styled_run_xml(&item.bullet));
        self.output.push_str(&styled_run_xml(&item.run));
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a table
    fn generate_table(&mut self, table: &StyledTable) {
        let columns = table.column_count.max(1) as u32;
        let column_width = TEXT_WIDTH / columns;

        self.output.push_str("<w:tbl>\n<w:tblPr>\n");
        self.output
            .push_str("<w:tblW w:w=\"5000\" w:type=\"pct\"/>\n");
        self.output.push_str(&format!(
            "<w:tblCellMar><w:top w:w=\"{m}\" w:type=\"dxa\"/><w:bottom w:w=\"{m}\" w:type=\"dxa\"/></w:tblCellMar>\n",
            m = table.table_margin
        ));
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        for _ in 0..columns {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", column_width));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in &table.rows {
            self.output.push_str("<w:tr>\n");

            // A short last row leaves the remaining grid columns empty
            let missing = table.column_count.saturating_sub(row.len());
            if missing > 0 {
                self.output.push_str(&format!(
                    "<w:trPr><w:gridAfter w:val=\"{}\"/></w:trPr>\n",
                    missing
                ));
            }

            for cell in row {
                self.output.push_str("<w:tc>\n<w:tcPr>\n");
                self.output.push_str(&format!(
                    "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>\n",
                    column_width
                ));
                self.output.push_str(&cell_borders_xml(&table.border));
                self.output.push_str(&format!(
                    "<w:tcMar><w:top w:w=\"{m}\" w:type=\"dxa\"/><w:left w:w=\"{m}\" w:type=\"dxa\"/>\
                     <w:bottom w:w=\"{m}\" w:type=\"dxa\"/><w:right w:w=\"{m}\" w:type=\"dxa\"/></w:tcMar>\n",
                    m = table.cell_margin
                ));
                self.output.push_str("</w:tcPr>\n");

                self.output.push_str("<w:p>\n<w:pPr>\n");
                self.output.push_str(&format!(
                    "<w:spacing w:line=\"{}\" w:lineRule=\"auto\"/>\n",
                    table.cell_line_spacing
                ));
                self.output.push_str("</w:pPr>\n");
                self.output.push_str(&styled_run_xml(cell));
                self.output.push_str("</w:p>\n");

                self.output.push_str("</w:tc>\n");
            }

            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
    }
}

fn spacing_xml(spacing: &Spacing) -> String {
    match spacing.line {
        Some(line) => format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\" w:line=\"{}\" w:lineRule=\"auto\"/>\n",
            spacing.before, spacing.after, line
        ),
        None => format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            spacing.before, spacing.after
        ),
    }
}

fn alignment_xml(alignment: Alignment) -> String {
    let val = match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
    };
    format!("<w:jc w:val=\"{}\"/>\n", val)
}

fn cell_borders_xml(border: &CellBorder) -> String {
    let mut xml = String::from("<w:tcBorders>");
    for side in ["top", "left", "bottom", "right"] {
        xml.push_str(&format!(
            "<w:{side} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            border.size, border.color
        ));
    }
    xml.push_str("</w:tcBorders>\n");
    xml
}

fn styled_run_xml(run: &StyledRun) -> String {
    run_xml(&run.text, &run.style)
}

/// Generate a run with direct formatting
fn run_xml(text: &str, style: &RunStyle) -> String {
    let font = escape_text(&style.font);
    let mut rpr = format!("<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>");
    if style.bold {
        rpr.push_str("<w:b/><w:bCs/>");
    }
    rpr.push_str(&format!("<w:color w:val=\"{}\"/>", style.color));
    rpr.push_str(&format!(
        "<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>",
        size = style.size
    ));

    format!(
        "<w:r>\n<w:rPr>{}</w:rPr>\n<w:t xml:space=\"preserve\">{}</w:t>\n</w:r>\n",
        rpr,
        escape_text(text)
    )
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>plaindoc</Application>
  <AppVersion>1.0</AppVersion>
</Properties>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use plaindoc_core::assemble_document;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::Cursor;

    fn generate(content: &str) -> OoxmlArchive {
        let theme = Theme::default();
        let blocks = assemble_document(content, &theme);
        let bytes = DocxWriter::new(&theme).generate(&blocks).unwrap();
        OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap()
    }

    fn document_xml(archive: &OoxmlArchive) -> String {
        archive.get_string("word/document.xml").unwrap()
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
            }
        }
    }

    #[test]
    fn test_package_parts() {
        let archive = generate("# Title\nBody");
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.contains(part), "missing part {}", part);
            assert_well_formed(&archive.get_string(part).unwrap());
        }
    }

    #[test]
    fn test_empty_document() {
        let archive = generate("");
        let xml = document_xml(&archive);
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("<w:sectPr>"));
        assert!(!xml.contains("<w:p>"));
        assert_well_formed(&xml);
    }

    #[test]
    fn test_heading_xml() {
        let xml = document_xml(&generate("# Main\n## Sub"));
        assert!(xml.contains("<w:pStyle w:val=\"Heading1\"/>"));
        assert!(xml.contains("<w:pStyle w:val=\"Heading2\"/>"));
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:jc w:val=\"left\"/>"));
        assert!(xml.contains("<w:sz w:val=\"32\"/>"));
        assert!(xml.contains("<w:color w:val=\"1B2A4A\"/>"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("Main"));
    }

    #[test]
    fn test_paragraph_xml() {
        let xml = document_xml(&generate("Plain prose"));
        assert!(xml.contains("<w:ind w:firstLine=\"720\"/>"));
        assert!(xml.contains(
            "<w:spacing w:before=\"120\" w:after=\"120\" w:line=\"360\" w:lineRule=\"auto\"/>"
        ));
        assert!(xml.contains("<w:color w:val=\"2D3748\"/>"));
        assert!(xml.contains("Century Gothic"));
        assert!(xml.contains(">Plain prose<"));
    }

    #[test]
    fn test_list_item_xml() {
        let xml = document_xml(&generate("- Apples\n- Pears"));
        assert!(xml.contains("<w:ind w:left=\"720\"/>"));
        assert!(xml.contains("<w:color w:val=\"4A90E2\"/>"));
        assert!(xml.contains("\u{2022} "));
        assert!(xml.contains("Apples"));
        assert!(xml.contains("Pears"));
        assert_eq!(xml.matches("<w:p>").count(), 2);
    }

    #[test]
    fn test_table_xml() {
        let xml = document_xml(&generate("| a | b |\n| c | d | e |"));
        assert_well_formed(&xml);
        assert!(xml.contains("<w:tbl>"));
        assert!(xml.contains("<w:tblW w:w=\"5000\" w:type=\"pct\"/>"));
        assert_eq!(xml.matches("<w:gridCol ").count(), 3);
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 5);
        assert!(xml.contains("<w:gridAfter w:val=\"1\"/>"));
        assert!(xml.contains(
            "<w:top w:val=\"single\" w:sz=\"1\" w:space=\"0\" w:color=\"2C3E67\"/>"
        ));
        // Trailing table is followed by an empty paragraph
        assert!(xml.contains("</w:tbl>\n<w:p/>"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let xml = document_xml(&generate("Fish & <chips> \"quoted\""));
        assert!(xml.contains("Fish &amp; &lt;chips&gt;"));
        assert_well_formed(&xml);
    }

    #[test]
    fn test_control_characters_removed() {
        let archive = generate("page one\x0cpage two\n- bell\x07");
        let xml = document_xml(&archive);
        assert!(xml.contains(">page one page two<"));
        assert!(xml.contains(">bell<"));
        assert!(!xml.contains('\u{0C}'));
        assert!(!xml.contains('\u{07}'));
        assert_well_formed(&xml);

        let theme = Theme::default();
        let bytes = DocxWriter::new(&theme)
            .with_title("Q3\x0cQ4")
            .generate(&[])
            .unwrap();
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
        let core = archive.get_string("docProps/core.xml").unwrap();
        assert!(core.contains("<dc:title>Q3 Q4</dc:title>"));
        assert_well_formed(&core);
    }

    #[test]
    fn test_core_properties() {
        let theme = Theme::default();
        let bytes = DocxWriter::new(&theme)
            .with_title("Q3 & Q4")
            .with_author("Ops")
            .generate(&[])
            .unwrap();
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
        let core = archive.get_string("docProps/core.xml").unwrap();
        assert!(core.contains("<dc:title>Q3 &amp; Q4</dc:title>"));
        assert!(core.contains("<dc:creator>Ops</dc:creator>"));
    }

    #[test]
    fn test_styles_use_theme_font() {
        let theme = Theme {
            font: "Calibri".to_string(),
            ..Theme::default()
        };
        let bytes = DocxWriter::new(&theme).generate(&[]).unwrap();
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
        let styles = archive.get_string("word/styles.xml").unwrap();
        assert!(styles.contains("w:ascii=\"Calibri\""));
        assert!(styles.contains("w:styleId=\"Heading3\""));
        assert!(!styles.contains("w:styleId=\"Heading4\""));
    }

    #[test]
    fn test_deterministic() {
        let theme = Theme::default();
        let blocks = assemble_document("# A\nb\n- c\n| d | e |", &theme);
        let first = DocxWriter::new(&theme).generate(&blocks).unwrap();
        let second = DocxWriter::new(&theme).generate(&blocks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_writer_reusable() {
        let theme = Theme::default();
        let mut writer = DocxWriter::default();
        writer
            .generate(&assemble_document("first", &theme))
            .unwrap();
        let bytes = writer
            .generate(&assemble_document("second", &theme))
            .unwrap();
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
        let xml = document_xml(&archive);
        assert!(xml.contains(">second<"));
        assert!(!xml.contains(">first<"));
    }
}
