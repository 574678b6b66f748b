//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use plaindoc_core::{segment, Theme};

use crate::generate::{generate, Format};
use crate::sink::DirectorySink;

/// Theme file picked up from the input's directory when `--theme` is absent
pub const THEME_FILE_NAME: &str = "plaindoc.toml";

#[derive(Parser)]
#[command(name = "plaindoc")]
#[command(author, version, about = "Plain text in, styled documents and slides out", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every generating command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Input text file
    pub input: PathBuf,

    /// Base name for the artifacts (defaults to the input file stem)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Theme TOML file
    #[arg(short, long)]
    pub theme: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a DOCX document
    Docx(OutputArgs),

    /// Generate a PPTX slide deck
    Pptx(OutputArgs),

    /// Generate the paged output placeholder (raw text saved as .pdf)
    Pdf(OutputArgs),

    /// Generate all three artifacts
    All(OutputArgs),

    /// Print the segment sequence of a file as JSON
    Segments {
        /// Input text file
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Docx(args) => {
            generate_command(&args, &[Format::Docx])?;
        }
        Commands::Pptx(args) => {
            generate_command(&args, &[Format::Pptx])?;
        }
        Commands::Pdf(args) => {
            generate_command(&args, &[Format::Pdf])?;
        }
        Commands::All(args) => {
            generate_command(&args, &Format::ALL)?;
        }
        Commands::Segments { input } => {
            segments_command(&input)?;
        }
    }

    Ok(())
}

/// Execute a generating command for the given formats.
///
/// Returns the paths written, in generation order.
pub fn generate_command(args: &OutputArgs, formats: &[Format]) -> Result<Vec<PathBuf>> {
    println!("plaindoc v{}", plaindoc_core::VERSION);
    println!("Converting: {}", args.input.display());

    let content = read_input(&args.input)?;
    let filename = artifact_base_name(args)?;
    let theme = resolve_theme(args.theme.as_deref(), &args.input)?;

    let mut sink = DirectorySink::new(&args.out_dir);
    for &format in formats {
        generate(format, &content, &filename, &theme, &mut sink)
            .with_context(|| format!("Failed to generate {}", format.artifact_name(&filename)))?;
    }

    for path in sink.saved() {
        println!("  Created: {}", path.display());
    }

    Ok(sink.saved().to_vec())
}

/// Execute the segments command
pub fn segments_command(input: &Path) -> Result<()> {
    let content = read_input(input)?;
    let segments = segment(&content);
    let json = serde_json::to_string_pretty(&segments).context("Failed to serialize segments")?;
    println!("{}", json);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

/// `--name`, or the input file stem
pub fn artifact_base_name(args: &OutputArgs) -> Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    args.input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| {
            format!(
                "Cannot derive an artifact name from {}; pass --name",
                args.input.display()
            )
        })
}

/// Pick the theme: explicit file, then `plaindoc.toml` beside the input,
/// then the built-in default
pub fn resolve_theme(explicit: Option<&Path>, input: &Path) -> Result<Theme> {
    if let Some(path) = explicit {
        info!(theme = %path.display(), "loading theme");
        return Theme::load(path)
            .with_context(|| format!("Failed to load theme: {}", path.display()));
    }

    let sibling = input.with_file_name(THEME_FILE_NAME);
    if sibling.is_file() {
        info!(theme = %sibling.display(), "loading theme found beside input");
        return Theme::load(&sibling)
            .with_context(|| format!("Failed to load theme: {}", sibling.display()));
    }

    Ok(Theme::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn args(input: &str) -> OutputArgs {
        OutputArgs {
            input: PathBuf::from(input),
            name: None,
            out_dir: PathBuf::from("."),
            theme: None,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["plaindoc", "docx", "notes.txt"]).unwrap();
        match cli.command {
            Commands::Docx(args) => {
                assert_eq!(args.input, PathBuf::from("notes.txt"));
                assert_eq!(args.out_dir, PathBuf::from("."));
                assert!(args.name.is_none());
                assert!(args.theme.is_none());
            }
            _ => panic!("expected docx command"),
        }
    }

    #[test]
    fn test_parse_all_with_options() {
        let cli = Cli::try_parse_from([
            "plaindoc", "all", "in.txt", "--name", "out", "--out-dir", "dist", "--theme",
            "brand.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::All(args) => {
                assert_eq!(args.name.as_deref(), Some("out"));
                assert_eq!(args.out_dir, PathBuf::from("dist"));
                assert_eq!(args.theme, Some(PathBuf::from("brand.toml")));
            }
            _ => panic!("expected all command"),
        }
    }

    #[test]
    fn test_dispatch_generating_commands() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("notes.txt");
        fs::write(&input, "# Notes\n- one").unwrap();
        let input = input.to_str().unwrap();
        let out_dir = temp.path().join("out");
        let out_dir = out_dir.to_str().unwrap();

        for command in ["docx", "pptx", "pdf"] {
            let cli =
                Cli::try_parse_from(["plaindoc", command, input, "--out-dir", out_dir]).unwrap();
            dispatch(cli).unwrap();
            assert!(temp.path().join("out").join(format!("notes.{command}")).exists());
        }

        let cli = Cli::try_parse_from([
            "plaindoc", "all", input, "--out-dir", out_dir, "--name", "bundle",
        ])
        .unwrap();
        dispatch(cli).unwrap();
        for ext in ["docx", "pptx", "pdf"] {
            assert!(temp.path().join("out").join(format!("bundle.{ext}")).exists());
        }

        let cli = Cli::try_parse_from(["plaindoc", "segments", input]).unwrap();
        dispatch(cli).unwrap();
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let cli = Cli::try_parse_from(["plaindoc", "segments", "/definitely/not/here.txt"]).unwrap();
        assert!(dispatch(cli).is_err());
    }

    #[test]
    fn test_base_name_from_stem() {
        assert_eq!(artifact_base_name(&args("dir/report.txt")).unwrap(), "report");
        assert_eq!(artifact_base_name(&args("plain")).unwrap(), "plain");

        let mut named = args("dir/report.txt");
        named.name = Some("custom".to_string());
        assert_eq!(artifact_base_name(&named).unwrap(), "custom");
    }

    #[test]
    fn test_base_name_without_stem() {
        assert!(artifact_base_name(&args("/")).is_err());
    }

    #[test]
    fn test_resolve_theme_default() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in.txt");
        let theme = resolve_theme(None, &input).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_resolve_theme_sibling_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(THEME_FILE_NAME), "font = \"Arial\"\n").unwrap();
        let input = temp.path().join("in.txt");

        let theme = resolve_theme(None, &input).unwrap();
        assert_eq!(theme.font, "Arial");
    }

    #[test]
    fn test_resolve_theme_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err =
            resolve_theme(Some(missing.as_path()), &temp.path().join("in.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to load theme"));
    }

    #[test]
    fn test_missing_input() {
        let err = read_input(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }
}
