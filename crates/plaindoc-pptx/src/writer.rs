//! PPTX generation from laid-out slides.
//!
//! Every slide uses the single blank layout; titles and content lines are
//! free-standing text boxes placed at the coordinates computed by the slide
//! assembler.

use std::io::{Cursor, Seek, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use plaindoc_core::slides::Gradient;
use plaindoc_core::theme::Palette;
use plaindoc_core::xml::escape_text;
use plaindoc_core::{Alignment, Slide, TextFrame, Theme};

use crate::constants::*;
use crate::error::{PptxError, Result};

/// Bullet glyph for bulleted content lines
const BULLET_CHAR: &str = "\u{2022}";
/// Hanging indent for bulleted paragraphs (0.375")
const BULLET_INDENT_EMU: i64 = 342_900;

/// PPTX document writer
pub struct PptxWriter {
    /// Slides to render
    slides: Vec<Slide>,

    /// Colors for the package theme
    palette: Palette,

    /// Font for the package theme
    font: String,

    /// Slide size in EMU (width, height)
    slide_size: (i64, i64),

    /// Presentation title
    title: Option<String>,

    /// Presentation author
    author: Option<String>,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl PptxWriter {
    /// Create a new PPTX writer using the theme's palette, font and slide size
    pub fn new(theme: &Theme) -> Self {
        Self {
            slides: Vec::new(),
            palette: theme.palette.clone(),
            font: theme.font.clone(),
            slide_size: (emu(theme.slides.width), emu(theme.slides.height)),
            title: None,
            author: None,
        }
    }

    /// Set the presentation title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Override the slide size in EMU
    pub fn with_slide_size(mut self, width: i64, height: i64) -> Self {
        self.slide_size = (width, height);
        self
    }

    /// Add a slide
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Add multiple slides
    pub fn add_slides(&mut self, slides: impl IntoIterator<Item = Slide>) {
        self.slides.extend(slides);
    }

    /// Number of slides queued for output
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        self.validate_slide_size()?;

        let cursor = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(cursor);

        // Fixed timestamp keeps the bytes reproducible
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        self.write_content_types(&mut zip, options)?;
        self.write_root_rels(&mut zip, options)?;
        self.write_app_xml(&mut zip, options)?;
        self.write_core_xml(&mut zip, options)?;
        self.write_presentation_xml(&mut zip, options)?;
        self.write_presentation_rels(&mut zip, options)?;
        self.write_pres_props(&mut zip, options)?;
        self.write_table_styles(&mut zip, options)?;
        self.write_view_props(&mut zip, options)?;
        self.write_theme(&mut zip, options)?;
        self.write_slide_master(&mut zip, options)?;
        self.write_slide_layout(&mut zip, options)?;

        for (i, slide) in self.slides.iter().enumerate() {
            self.write_slide(&mut zip, options, i + 1, slide)?;
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();
        debug!(slides = self.slides.len(), bytes = bytes.len(), "generated PPTX");
        Ok(bytes)
    }

    fn validate_slide_size(&self) -> Result<()> {
        let (width, height) = self.slide_size;
        let range = MIN_SLIDE_EDGE_EMU..=MAX_SLIDE_EDGE_EMU;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(PptxError::invalid_slide_size(
                width,
                height,
                "each edge must be between 1 and 56 inches",
            ));
        }
        Ok(())
    }

    /// Write [Content_Types].xml
    fn write_content_types<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
        );

        for i in 1..=self.slides.len() {
            content.push_str(&format!(
                "  <Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n",
                i
            ));
        }

        content.push_str("</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write _rels/.rels
    fn write_root_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("_rels/.rels", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/app.xml
    fn write_app_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/app.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>plaindoc</Application>
  <PresentationFormat>Widescreen</PresentationFormat>
  <Slides>{}</Slides>
  <AppVersion>1.0</AppVersion>
</Properties>"#,
            self.slides.len()
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/core.xml
    fn write_core_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/core.xml", options)?;

        let title = self.title.as_deref().unwrap_or("Presentation");
        let author = self.author.as_deref().unwrap_or("plaindoc");

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
</cp:coreProperties>"#,
            escape_text(title),
            escape_text(author),
            escape_text(author)
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presentation.xml
    fn write_presentation_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presentation.xml", options)?;

        let mut slide_refs = String::new();
        for i in 1..=self.slides.len() {
            slide_refs.push_str(&format!(
                "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
                255 + i,
                i + 3 // rId1=slideMaster, rId2=presProps, rId3=theme, rId4+=slides
            ));
        }

        let (width, height) = self.slide_size;
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{}  </p:sldIdLst>
  <p:sldSz cx="{}" cy="{}"/>
  <p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            slide_refs,
            width,
            height,
            height, // Notes are rotated
            width
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/_rels/presentation.xml.rels
    fn write_presentation_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;

        let mut rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{}" Target="theme/theme1.xml"/>
"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_MASTER, REL_TYPE_THEME
        );

        for i in 1..=self.slides.len() {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
                i + 3,
                REL_TYPE_SLIDE,
                i
            ));
        }

        rels.push_str("</Relationships>");

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presProps.xml
    fn write_pres_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/tableStyles.xml
    fn write_table_styles<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/tableStyles.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
            NS_DRAWING
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/viewProps.xml
    fn write_view_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/viewProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/theme/theme1.xml built from the palette and font
    fn write_theme<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/theme/theme1.xml", options)?;

        let palette = &self.palette;
        let font = escape_text(&self.font);
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{ns}" name="plaindoc">
  <a:themeElements>
    <a:clrScheme name="plaindoc">
      <a:dk1><a:srgbClr val="{text}"/></a:dk1>
      <a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="{primary}"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="{accent}"/></a:accent1>
      <a:accent2><a:srgbClr val="{secondary}"/></a:accent2>
      <a:accent3><a:srgbClr val="{success}"/></a:accent3>
      <a:accent4><a:srgbClr val="{warning}"/></a:accent4>
      <a:accent5><a:srgbClr val="{primary}"/></a:accent5>
      <a:accent6><a:srgbClr val="{text}"/></a:accent6>
      <a:hlink><a:srgbClr val="{accent}"/></a:hlink>
      <a:folHlink><a:srgbClr val="{secondary}"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="plaindoc">
      <a:majorFont>
        <a:latin typeface="{font}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="{font}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="plaindoc">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
            ns = NS_DRAWING,
            text = palette.text,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
            success = palette.success,
            warning = palette.warning,
            font = font,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideMasters/slideMaster1.xml
    fn write_slide_master<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
{}  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            empty_shape_tree()
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{}" Target="../theme/theme1.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_LAYOUT, REL_TYPE_THEME
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write the single blank layout every slide uses
    fn write_slide_layout<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">
  <p:cSld name="Blank">
{}  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            empty_shape_tree()
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_MASTER
        );
        zip.write_all(rels.as_bytes())?;

        Ok(())
    }

    /// Write a single slide and its relationships
    fn write_slide<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        slide_num: usize,
        slide: &Slide,
    ) -> Result<()> {
        zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;

        let content = generate_slide_xml(slide);
        zip.write_all(content.as_bytes())?;

        zip.start_file(
            format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            options,
        )?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_LAYOUT
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }
}

fn empty_shape_tree() -> &'static str {
    r#"    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
"#
}

/// Generate slide XML content
fn generate_slide_xml(slide: &Slide) -> String {
    let mut shapes = String::new();

    // Shape id 1 is the group root
    shapes.push_str(&text_box_xml(2, "Title", &slide.title, false, &slide.title_frame));
    for (i, line) in slide.lines.iter().enumerate() {
        let id = i + 3;
        shapes.push_str(&text_box_xml(
            id,
            &format!("TextBox {}", id),
            &line.text,
            line.bulleted,
            &line.frame,
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
{}    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_PRESENTATION,
        background_xml(&slide.background),
        shapes
    )
}

/// Generate a two-stop linear gradient background
fn background_xml(gradient: &Gradient) -> String {
    format!(
        r#"    <p:bg>
      <p:bgPr>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:srgbClr val="{}"/></a:gs>
            <a:gs pos="100000"><a:srgbClr val="{}"/></a:gs>
          </a:gsLst>
          <a:lin ang="{}" scaled="0"/>
        </a:gradFill>
        <a:effectLst/>
      </p:bgPr>
    </p:bg>
"#,
        gradient.from,
        gradient.to,
        gradient.angle * ANGLE_SCALE
    )
}

/// Generate an absolutely positioned text box holding one paragraph
fn text_box_xml(id: usize, name: &str, text: &str, bulleted: bool, frame: &TextFrame) -> String {
    let align = match frame.alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
    };

    let paragraph_props = if bulleted {
        format!(
            "<a:pPr marL=\"{indent}\" indent=\"-{indent}\" algn=\"{align}\"><a:buFont typeface=\"Arial\"/><a:buChar char=\"{BULLET_CHAR}\"/></a:pPr>",
            indent = BULLET_INDENT_EMU,
        )
    } else {
        format!("<a:pPr algn=\"{align}\"><a:buNone/></a:pPr>")
    };

    let bold = if frame.bold { " b=\"1\"" } else { "" };
    let font = escape_text(&frame.font);

    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{x}" y="{y}"/>
            <a:ext cx="{cx}" cy="{cy}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>
          <a:lstStyle/>
          <a:p>
            {paragraph_props}
            <a:r>
              <a:rPr lang="en-US" sz="{size}"{bold} dirty="0">
                <a:solidFill><a:srgbClr val="{color}"/></a:solidFill>
                <a:latin typeface="{font}"/>
              </a:rPr>
              <a:t>{text}</a:t>
            </a:r>
          </a:p>
        </p:txBody>
      </p:sp>
"#,
        id = id,
        name = escape_text(name),
        x = emu(frame.x),
        y = emu(frame.y),
        cx = emu(frame.width),
        cy = emu(frame.height),
        paragraph_props = paragraph_props,
        size = frame.font_size * FONT_SIZE_SCALE,
        bold = bold,
        color = frame.color,
        font = font,
        text = escape_text(text),
    )
}
