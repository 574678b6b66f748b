//! Integration tests for plaindoc CLI
//!
//! These tests run the full pipelines into a temporary directory and read
//! the packages back from disk.

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use plaindoc_cli::{
    generate_command, generate_document, generate_paged_output, generate_slides, DirectorySink,
    Format, OutputArgs, THEME_FILE_NAME,
};
use plaindoc_core::Theme;
use tempfile::TempDir;
use zip::ZipArchive;

const SAMPLE: &str = "# Quarterly Report\n\
Revenue grew in every region.\n\
## Highlights\n\
- New customers\n\
- Lower churn\n\
| Region | Growth |\n\
| North | 12% |\n";

const DECK: &str = "Diapositiva 1: Kickoff\n\
- Goals\n\
- Timeline\n\
\n\
Thanks\n\
Questions welcome";

fn read_part(path: &Path, part: &str) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(part).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn part_names(path: &Path) -> Vec<String> {
    let bytes = fs::read(path).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(String::from).collect()
}

#[test]
fn test_docx_written_to_directory() {
    let temp = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(temp.path());

    generate_document(SAMPLE, "report", &Theme::default(), &mut sink).unwrap();

    let path = temp.path().join("report.docx");
    assert!(path.exists());

    let document = read_part(&path, "word/document.xml");
    assert!(document.contains("Quarterly Report"));
    assert!(document.contains("Revenue grew in every region."));
    assert!(document.contains("<w:pStyle w:val=\"Heading1\"/>"));
    assert!(document.contains("<w:pStyle w:val=\"Heading2\"/>"));
    assert!(document.contains("New customers"));
    assert!(document.contains("<w:tbl>"));
    assert!(document.contains("12%"));

    let core = read_part(&path, "docProps/core.xml");
    assert!(core.contains("<dc:title>report</dc:title>"));
}

#[test]
fn test_pptx_written_to_directory() {
    let temp = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(temp.path());

    generate_slides(DECK, "deck", &Theme::default(), &mut sink).unwrap();

    let path = temp.path().join("deck.pptx");
    let names = part_names(&path);
    assert!(names.iter().any(|n| n == "ppt/slides/slide1.xml"));
    assert!(names.iter().any(|n| n == "ppt/slides/slide2.xml"));
    assert!(!names.iter().any(|n| n == "ppt/slides/slide3.xml"));

    let first = read_part(&path, "ppt/slides/slide1.xml");
    assert!(first.contains("<a:t>1: Kickoff</a:t>"));
    assert!(first.contains("<a:t>Goals</a:t>"));
    assert!(first.contains("<a:buChar"));

    let second = read_part(&path, "ppt/slides/slide2.xml");
    assert!(second.contains("<a:t>Thanks</a:t>"));
    assert!(second.contains("<a:t>Questions welcome</a:t>"));
    assert!(!second.contains("<a:buChar"));
}

#[test]
fn test_pdf_placeholder_is_raw_input() {
    let temp = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(temp.path());

    generate_paged_output(SAMPLE, "report", &mut sink).unwrap();

    let bytes = fs::read(temp.path().join("report.pdf")).unwrap();
    assert_eq!(bytes, SAMPLE.as_bytes());
}

#[test]
fn test_generate_command_all_formats() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("notes.txt");
    fs::write(&input, SAMPLE).unwrap();
    let out_dir = temp.path().join("dist");

    let args = OutputArgs {
        input,
        name: None,
        out_dir: out_dir.clone(),
        theme: None,
    };
    let written = generate_command(&args, &Format::ALL).unwrap();

    let expected: Vec<PathBuf> = ["notes.docx", "notes.pptx", "notes.pdf"]
        .iter()
        .map(|name| out_dir.join(name))
        .collect();
    assert_eq!(written, expected);
    for path in &expected {
        assert!(path.exists(), "missing {}", path.display());
    }
}

#[test]
fn test_generate_command_uses_sibling_theme() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("brand.txt");
    fs::write(&input, "Plain paragraph").unwrap();
    fs::write(
        temp.path().join(THEME_FILE_NAME),
        "font = \"Georgia\"\n\n[palette]\ntext = \"#112233\"\n",
    )
    .unwrap();

    let args = OutputArgs {
        input,
        name: Some("styled".to_string()),
        out_dir: temp.path().to_path_buf(),
        theme: None,
    };
    generate_command(&args, &[Format::Docx]).unwrap();

    let document = read_part(&temp.path().join("styled.docx"), "word/document.xml");
    assert!(document.contains("w:ascii=\"Georgia\""));
    assert!(document.contains("<w:color w:val=\"112233\"/>"));
}

#[test]
fn test_generate_command_theme_slide_size() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("talk.txt");
    fs::write(&input, DECK).unwrap();
    let theme = temp.path().join("four-three.toml");
    fs::write(&theme, "[slides]\nwidth = 10.0\nheight = 7.5\n").unwrap();

    let args = OutputArgs {
        input,
        name: None,
        out_dir: temp.path().to_path_buf(),
        theme: Some(theme),
    };
    generate_command(&args, &[Format::Pptx]).unwrap();

    let presentation = read_part(&temp.path().join("talk.pptx"), "ppt/presentation.xml");
    assert!(presentation.contains("<p:sldSz cx=\"9144000\" cy=\"6858000\"/>"));
}

#[test]
fn test_generate_command_invalid_theme() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "text").unwrap();
    let theme = temp.path().join("bad.toml");
    fs::write(&theme, "[palette]\nprimary = \"not-a-color\"\n").unwrap();

    let args = OutputArgs {
        input,
        name: None,
        out_dir: temp.path().join("out"),
        theme: Some(theme),
    };
    assert!(generate_command(&args, &[Format::Docx]).is_err());
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_generate_command_missing_input() {
    let temp = TempDir::new().unwrap();
    let args = OutputArgs {
        input: temp.path().join("absent.txt"),
        name: None,
        out_dir: temp.path().to_path_buf(),
        theme: None,
    };
    let err = generate_command(&args, &[Format::Pdf]).unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_empty_input_produces_valid_packages() {
    let temp = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(temp.path());
    let theme = Theme::default();

    generate_document("", "empty", &theme, &mut sink).unwrap();
    generate_slides("", "empty", &theme, &mut sink).unwrap();

    let document = read_part(&temp.path().join("empty.docx"), "word/document.xml");
    assert!(document.contains("<w:body>"));
    let names = part_names(&temp.path().join("empty.pptx"));
    assert!(names.iter().any(|n| n == "ppt/presentation.xml"));
    assert!(!names.iter().any(|n| n.starts_with("ppt/slides/")));
}
