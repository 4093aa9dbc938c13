//! xmldoc — convert C# XML documentation files to Markdown.
//!
//! - **file mode**: `xmldoc -o docs MyLib/bin/Debug/net9.0/MyLib.xml`; with no
//!   arguments, every `*/bin/Debug/net*/*.xml` below the current directory
//! - **stdin mode**: `xmldoc - < MyLib.xml > MyLib.md`

mod extension;
mod format;
mod logging;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use render::markdown::{assemble, AssembleOptions, DEFAULT_NAMESPACE};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Where `dotnet build` puts documentation files, relative to a solution root.
const DEFAULT_PATTERN: &str = "*/bin/Debug/net*/*.xml";

#[derive(Parser)]
#[command(
    name = "xmldoc",
    about = "Convert C# XML documentation files to Markdown"
)]
struct Cli {
    /// Input files, directories or glob patterns. `-` reads from stdin.
    /// Defaults to */bin/Debug/net*/*.xml
    files: Vec<String>,

    /// Output directory for the generated .md files
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Root namespace; members outside it are not rendered
    #[arg(short = 'n', long, env = "XMLDOC_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = AssembleOptions {
        namespace: cli.namespace.clone(),
    };

    if cli.files.len() == 1 && cli.files[0] == "-" {
        stdin_mode(&options)?;
        return Ok(ExitCode::SUCCESS);
    }

    file_mode(&cli, &options)
}

/// stdin mode: read one XML document from stdin, write Markdown to stdout.
fn stdin_mode(options: &AssembleOptions) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let corpus = parser::parse(&input).context("failed to parse stdin")?;
    print!("{}", assemble(&corpus, "stdin", options));
    Ok(())
}

/// file mode: convert each input file into `<output>/<stem>.md`.
///
/// A file that fails to load is reported and skipped; the exit code is
/// non-zero if any file failed.
fn file_mode(cli: &Cli, options: &AssembleOptions) -> Result<ExitCode> {
    let patterns = if cli.files.is_empty() {
        vec![DEFAULT_PATTERN.to_string()]
    } else {
        cli.files.clone()
    };

    let input_files = expand_globs(&patterns)?;
    if input_files.is_empty() {
        anyhow::bail!("no XML documentation files found");
    }

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    let mut failed = 0usize;
    for path in &input_files {
        println!("Converting {}...", path.display());
        match convert_file(path, &cli.output, options) {
            Ok(out_path) => println!("  -> Created {}", out_path.display()),
            Err(e) => {
                tracing::debug!(file = %path.display(), error = ?e, "conversion failed");
                eprintln!("  Error: {:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("\n{} of {} files failed", failed, input_files.len());
        return Ok(ExitCode::FAILURE);
    }

    println!("\nConversion complete!");
    Ok(ExitCode::SUCCESS)
}

/// Convert one documentation file, returning the path written.
fn convert_file(path: &Path, output_dir: &Path, options: &AssembleOptions) -> Result<PathBuf> {
    let corpus = parser::load_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let markdown = assemble(&corpus, &source_name, options);

    let out_path = output_dir.join(derive_output_name(path));
    fs::write(&out_path, markdown)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(out_path)
}

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for `.xml` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("xml") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output file name for an input path.
/// "CsLib/bin/Debug/net9.0/CsLib.Data.xml" → "CsLib.Data.md"
fn derive_output_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    format!("{}.md", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_name_from_xml() {
        assert_eq!(
            derive_output_name(Path::new("CsLib/bin/Debug/net9.0/CsLib.Data.xml")),
            "CsLib.Data.md"
        );
        assert_eq!(derive_output_name(Path::new("CsLib.xml")), "CsLib.md");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("docs")), "docs.md");
    }

    #[test]
    fn expands_directories_and_globs() {
        let dir = TempDir::new().unwrap();
        let net = dir.path().join("CsLib/bin/Debug/net9.0");
        fs::create_dir_all(&net).unwrap();
        fs::write(net.join("CsLib.xml"), "<doc/>").unwrap();
        fs::write(net.join("CsLib.dll"), "").unwrap();
        fs::write(net.join("CsLib.Data.xml"), "<doc/>").unwrap();

        let from_dir = expand_globs(&[net.to_string_lossy().to_string()]).unwrap();
        assert_eq!(from_dir.len(), 2);

        let pattern = format!("{}/*/bin/Debug/net*/*.xml", dir.path().display());
        let from_glob = expand_globs(&[pattern]).unwrap();
        assert_eq!(from_glob, from_dir);
    }

    #[test]
    fn duplicate_inputs_are_merged() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("CsLib.xml");
        fs::write(&file, "<doc/>").unwrap();
        let name = file.to_string_lossy().to_string();
        assert_eq!(expand_globs(&[name.clone(), name]).unwrap().len(), 1);
    }
}
