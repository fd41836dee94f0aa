//! Report parsing and schema definitions.
//!
//! This module handles:
//! - Parsing pprof `-top` text into a `Report`
//! - Converting value suffixes to base units
//! - Defining the report schema

pub mod schema;
pub mod text_report;
pub mod units;

// Re-export main types
pub use schema::{Entry, Report, ReportHeader};
pub use text_report::{is_column_header, parse_lines, parse_report, parse_row, ReportBuilder};
pub use units::{parse_percent, parse_quantity, Dimension, Quantity};
