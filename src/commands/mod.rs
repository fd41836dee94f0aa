//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod parse;
pub mod utils;

// Re-export main command functions
pub use parse::{execute_parse, validate_args, ParseArgs};
pub use utils::{display_schema, display_version, validate_report_file};
