use crate::aggregator::calculate_flat_distribution;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let document = read_report(file_path)
        .with_context(|| format!("Failed to load report {}", file_path.display()))?;
    let report = &document.report;

    println!("✓ Valid report JSON");
    println!("  Version: {}", document.version);
    println!("  Source: {}", document.source);
    println!("  Type: {}", report.unit);
    println!("  Total Samples: {}", report.total_samples);
    println!("  Entries: {}", report.entries.len());
    println!("  {}", calculate_flat_distribution(report).summary());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("pprof-view Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  source: string            - Input path or <stdin>");
        println!("  generated_at: string      - ISO 8601 timestamp");
        println!("  report: object");
        println!("    unit: string            - Sample type from the Type: line");
        println!("    total_samples: number   - Sum of flat values");
        println!("    header: object          - Optional file/time/duration");
        println!("    entries: array          - Rows in listing order");
        println!("      function_name: string");
        println!("      flat: number          - Self value (ns, bytes or count)");
        println!("      flat_percent: number");
        println!("      sum_percent: number   - Running flat% total");
        println!("      cum: number           - Value including callees");
        println!("      cum_percent: number");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("pprof-view v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Parses `go tool pprof -top` text into structured reports.");
}
