//! CLI tool for turning Premiere Pro marker exports into YouTube chapters.
//!
//! # Usage
//!
//! ```bash
//! # Convert an export and print the chapters to stdout
//! yt-chapters --input markers.txt
//!
//! # Save next to the input as "markers - YouTube.txt"
//! yt-chapters -i markers.txt --save
//!
//! # Read from stdin, emit a JSON report on stderr
//! cat markers.txt | yt-chapters --report json > chapters.txt
//! ```

use std::{
    fs::File,
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chapters::prelude::*;
use clap::{Parser, ValueEnum};
use tracing::debug;

/// File extensions accepted as marker exports.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "tsv", "csv"];

/// Suffix of the file written by `--save`.
const SAVE_SUFFIX: &str = " - YouTube.txt";

/// Convert a Premiere Pro marker export into YouTube description chapters.
///
/// Reads the export from a file or stdin, writes the chapter list to a
/// file or stdout and reports validation problems on stderr.
#[derive(Parser, Debug)]
#[command(name = "yt-chapters")]
#[command(version, about)]
struct Args {
    /// Input file path (.txt, .tsv or .csv). If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the chapters next to the input as "<name> - YouTube.txt".
    #[arg(long, requires = "input")]
    save: bool,

    /// Text encoding of the input.
    #[arg(long, value_enum, default_value_t = EncodingArg::Auto)]
    encoding: EncodingArg,

    /// Field order of each chapter line.
    #[arg(long, value_enum, default_value_t = OrderArg::TimestampFirst)]
    order: OrderArg,

    /// Format of the validation report printed to stderr.
    #[arg(long, value_enum, default_value_t = ReportArg::Text)]
    report: ReportArg,

    /// Treat warnings as failures.
    #[arg(long)]
    strict: bool,

    /// Minimum number of chapters.
    #[arg(long, default_value_t = chapters::validation::MIN_CHAPTERS)]
    min_chapters: usize,

    /// Minimum chapter length in seconds.
    #[arg(long, default_value_t = chapters::validation::MIN_GAP_SECS)]
    min_gap: i64,
}

/// Input encodings for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    /// Detect from BOM or content.
    Auto,
    /// UTF-16 little endian (Premiere default).
    Utf16le,
    /// UTF-16 big endian.
    Utf16be,
    /// UTF-8.
    Utf8,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Auto => Encoding::Auto,
            EncodingArg::Utf16le => Encoding::Utf16Le,
            EncodingArg::Utf16be => Encoding::Utf16Be,
            EncodingArg::Utf8 => Encoding::Utf8,
        }
    }
}

/// Chapter line layouts for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    /// "00:00 Intro" (what YouTube reads).
    TimestampFirst,
    /// "Intro 00:00".
    NameFirst,
}

impl From<OrderArg> for ChapterOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::TimestampFirst => ChapterOrder::TimestampFirst,
            OrderArg::NameFirst => ChapterOrder::NameFirst,
        }
    }
}

/// Report formats for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportArg {
    /// Human-readable lines.
    Text,
    /// The validation result as JSON.
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Open input source
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            ensure_supported_extension(path)?;
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    let content = chapters::reader::read_text(input, args.encoding.into())
        .context("Failed to read marker export")?;

    let rules = ValidationRules { min_chapters: args.min_chapters, min_gap_secs: args.min_gap };
    let conversion = Conversion::run_with(&content, &rules);
    if conversion.is_empty() {
        bail!(
            "No chapter markers found in the file. Please ensure the file was exported from \
             Adobe Premiere Pro."
        );
    }

    // Open output destination
    let output_path = match (&args.output, &args.input) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(input)) if args.save => Some(save_path(input)),
        _ => None,
    };
    let output: Box<dyn Write> = match &output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout().lock()),
    };

    // The chapters are written even when validation fails, as a preview
    let written = write_chapters(output, &conversion.chapters, args.order.into())?;
    debug!(written, output = ?output_path, "wrote chapters");

    report(&conversion.validation, args.report)?;

    let result = &conversion.validation;
    if !result.valid {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }
    if args.strict && !result.warnings.is_empty() {
        bail!("Validation produced {} warning(s) in strict mode", result.warnings.len());
    }

    Ok(())
}

/// Rejects files that cannot be marker exports.
fn ensure_supported_extension(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));

    if !supported {
        bail!("Invalid file type. Please upload a .txt, .tsv, or .csv file.");
    }
    Ok(())
}

/// Path of the `--save` output: the input's stem plus " - YouTube.txt".
fn save_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned());
    let name = match stem {
        Some(stem) => format!("{stem}{SAVE_SUFFIX}"),
        None => "youtube-chapters.txt".to_string(),
    };
    input.with_file_name(name)
}

/// Writes the chapter text and returns the number of chapters written.
fn write_chapters<W: Write>(output: W, chapters: &[Chapter], order: ChapterOrder) -> Result<usize> {
    let mut writer = ChapterWriter::new(output, order);
    writer.write_all(chapters).context("Failed to write chapters")?;
    writer.flush().context("Failed to flush output")?;
    Ok(writer.chapters_written())
}

/// Prints validation errors and warnings to stderr.
fn report(result: &ValidationResult, format: ReportArg) -> Result<()> {
    if format == ReportArg::Json {
        let json = serde_json::to_string_pretty(result).context("Failed to render report")?;
        eprintln!("{json}");
        return Ok(());
    }

    // Separate the report from chapter text that may share the terminal
    eprintln!();
    for err in &result.errors {
        eprintln!("error: {err}");
    }
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    if result.valid {
        eprintln!("Chapters are valid for YouTube");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_uses_input_stem() {
        let path = save_path(Path::new("/tmp/episode 12.txt"));

        assert_eq!(path, PathBuf::from("/tmp/episode 12 - YouTube.txt"));
    }

    #[test]
    fn test_supported_extensions() {
        assert!(ensure_supported_extension(Path::new("markers.txt")).is_ok());
        assert!(ensure_supported_extension(Path::new("markers.TSV")).is_ok());
        assert!(ensure_supported_extension(Path::new("markers.csv")).is_ok());
        assert!(ensure_supported_extension(Path::new("markers.xml")).is_err());
        assert!(ensure_supported_extension(Path::new("markers")).is_err());
    }

    #[test]
    fn test_write_chapters_counts() {
        let mut output = Vec::new();
        let chapters = vec![Chapter::new("Intro", "00:00"), Chapter::new("Main", "01:30")];

        let count = write_chapters(&mut output, &chapters, ChapterOrder::NameFirst).unwrap();

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(output).unwrap(), "Intro 00:00\nMain 01:30");
    }

    #[test]
    fn test_args_reject_save_without_input() {
        assert!(Args::try_parse_from(["yt-chapters", "--save"]).is_err());
        assert!(
            Args::try_parse_from(["yt-chapters", "-i", "a.txt", "--save", "-o", "b.txt"]).is_err()
        );
        assert!(Args::try_parse_from(["yt-chapters", "-i", "a.txt", "--save"]).is_ok());
    }
}
