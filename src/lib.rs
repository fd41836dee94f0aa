//! pprof-view
//!
//! Parses the text listing printed by `go tool pprof -top` into a
//! structured `Report` that charts and tables can consume.
//!
//! ```
//! use pprof_view::parser::parse_report;
//!
//! let report = parse_report(
//!     "Type: cpu\n\
//!      flat  flat%   sum%        cum   cum%\n\
//!      10.50s 52.50% 52.50%     10.50s 52.50%  main.fibonacci\n",
//! );
//! assert_eq!(report.unit, "cpu");
//! assert_eq!(report.entries[0].function_name, "main.fibonacci");
//! assert_eq!(report.total_samples, 10_500_000_000);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{parse_report, Entry, Report};
