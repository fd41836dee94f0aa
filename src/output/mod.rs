//! Output writers and display formatting for reports.
//!
//! This module handles:
//! - JSON report documents (write and read back)
//! - Value, percentage and name formatting for display

pub mod format;
pub mod json;

// Re-export main functions
pub use format::{format_percent, format_summary, format_value, truncate_function_name};
pub use json::{read_report, to_document, write_report, ReportDocument};
