//! Parse command implementation.
//!
//! The parse command:
//! 1. Reads captured report text (file or stdin)
//! 2. Parses it into a report
//! 3. Writes the JSON document (if requested)
//! 4. Prints a text summary (if requested)

use crate::aggregator::calculate_flat_distribution;
use crate::output::{format_summary, to_document, write_report};
use crate::parser::parse_report;
use crate::utils::config::{DEFAULT_TOP_N, MAX_TOP_N, STDIN_PATH, STDIN_SOURCE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Report text to read; `-` reads stdin
    pub input: PathBuf,

    /// Output path for the JSON document (optional)
    pub output_json: Option<PathBuf>,

    /// Number of entries shown in the summary
    pub top: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(STDIN_PATH),
            output_json: None,
            top: DEFAULT_TOP_N,
            print_summary: false,
        }
    }
}

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input cannot be read
/// * JSON output cannot be written
pub fn execute_parse(args: ParseArgs) -> Result<()> {
    let start_time = Instant::now();

    let source = source_label(&args.input);
    info!("Parsing report from: {}", source);

    let text = read_input(&args.input)
        .with_context(|| format!("Failed to read report text from {}", source))?;
    debug!("Read {} bytes", text.len());

    let report = parse_report(&text);

    if report.is_empty() {
        warn!("No entries found in {}; is this `pprof -top` output?", source);
    } else {
        info!(
            "Parsed {} entries ({}), total {}",
            report.len(),
            if report.unit.is_empty() { "no type" } else { report.unit.as_str() },
            report.total_samples
        );
        info!(
            "Flat distribution: {}",
            calculate_flat_distribution(&report).summary()
        );
    }

    if args.print_summary {
        println!("{}", format_summary(&report, args.top));
    }

    if let Some(output_path) = &args.output_json {
        let document = to_document(report, source);
        write_report(&document, output_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output_path.display());
    }

    info!(
        "Parse completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_args(args: &ParseArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if let Some(output) = &args.output_json {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

/// Read the whole input, from stdin when the path is `-`
///
/// **Private** - internal helper for execute_parse
///
/// Invalid UTF-8 (e.g. raw C symbol bytes) is replaced with U+FFFD so
/// only the affected rows change.
fn read_input(input: &Path) -> Result<String> {
    let bytes = if is_stdin(input) {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        std::fs::read(input)?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN_PATH
}

fn source_label(input: &Path) -> String {
    if is_stdin(input) {
        STDIN_SOURCE.to_string()
    } else {
        input.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::read_report;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&ParseArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ParseArgs {
            input: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = ParseArgs {
            top: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_too_large() {
        let args = ParseArgs {
            top: 2000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = ParseArgs {
            output_json: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(&PathBuf::from("-")), "<stdin>");
        assert_eq!(source_label(&PathBuf::from("cpu.txt")), "cpu.txt");
    }

    #[test]
    fn test_execute_parse_writes_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("top.txt");
        let output = temp_dir.path().join("out/report.json");
        std::fs::write(
            &input,
            "Type: cpu\n flat flat% sum% cum cum%\n 2s 100% 100% 2s 100% main.main\n",
        )
        .unwrap();

        execute_parse(ParseArgs {
            input: input.clone(),
            output_json: Some(output.clone()),
            ..Default::default()
        })
        .unwrap();

        let document = read_report(&output).unwrap();
        assert_eq!(document.source, input.display().to_string());
        assert_eq!(document.report.unit, "cpu");
        assert_eq!(document.report.total_samples, 2_000_000_000);
    }

    #[test]
    fn test_execute_parse_tolerates_invalid_utf8() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("top.txt");
        let output = temp_dir.path().join("report.json");

        let mut bytes = b"Type: cpu\nflat flat% sum% cum cum%\n1s 50% 50% 1s 50% main.a\n".to_vec();
        bytes.extend_from_slice(b"1s 50% 100% 1s 50% main.\xff\n");
        std::fs::write(&input, bytes).unwrap();

        execute_parse(ParseArgs {
            input,
            output_json: Some(output.clone()),
            ..Default::default()
        })
        .unwrap();

        let report = read_report(&output).unwrap().report;
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].function_name, "main.a");
        assert_eq!(report.entries[1].function_name, "main.\u{FFFD}");
        assert_eq!(report.total_samples, 2_000_000_000);
    }

    #[test]
    fn test_execute_parse_missing_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ParseArgs {
            input: temp_dir.path().join("missing.txt"),
            ..Default::default()
        };
        assert!(execute_parse(args).is_err());
    }
}
