//! pprof-view CLI
//!
//! Turns captured `go tool pprof -top` output into a structured JSON
//! report and a quick text summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use pprof_view::commands::{
    display_schema, display_version, execute_parse, validate_args, validate_report_file,
    ParseArgs,
};
use pprof_view::utils::config::{DEFAULT_TOP_N, STDIN_PATH};

/// pprof-view - structured reports from pprof text output
#[derive(Parser, Debug)]
#[command(name = "pprof-view")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse `pprof -top` text into a report
    Parse {
        /// Report text file, or `-` for stdin
        #[arg(short, long, default_value = STDIN_PATH)]
        input: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of entries to show in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Parse {
            input,
            output,
            top,
            summary,
        } => {
            let args = ParseArgs {
                input,
                output_json: output,
                top,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
