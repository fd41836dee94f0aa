//! Parser for pprof's `-top` / `-text` listing.
//!
//! The input looks like:
//!
//! ```text
//! File: app
//! Type: cpu
//! Showing nodes accounting for 20s, 100% of 20s total
//!       flat  flat%   sum%        cum   cum%
//!     10.50s 52.50% 52.50%     10.50s 52.50%  main.fibonacci
//!      5.25s 26.25% 78.75%      5.25s 26.25%  runtime.mallocgc
//! ```
//!
//! Parsing is best-effort and total: every line is attempted on its own,
//! and lines that do not fit the row shape are dropped. Callers always get
//! a structurally valid `Report`, possibly empty.

use super::schema::{Entry, Report, ReportHeader};
use super::units::{parse_percent, parse_quantity};
use crate::utils::config::{
    COLUMN_HEADER_TOKENS, DURATION_PREFIX, FILE_PREFIX, TIME_PREFIX, TYPE_PREFIX,
};
use crate::utils::error::ParseError;

/// Parse a complete report text
///
/// **Public** - main entry point for parsing
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Never fails.
pub fn parse_report(text: &str) -> Report {
    parse_lines(text.split(|c| c == '\n' || c == '\r'))
}

/// Parse an already split sequence of lines
///
/// **Public** - for callers that receive tool output line by line
pub fn parse_lines<'a, I>(lines: I) -> Report
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(ReportBuilder::new(), |mut builder, line| {
            builder.push_line(line);
            builder
        })
        .finish()
}

/// Line-at-a-time accumulator behind `parse_report`
#[derive(Debug, Default)]
pub struct ReportBuilder {
    entries: Vec<Entry>,
    unit: Option<String>,
    header: ReportHeader,
    in_data_section: bool,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Unusable lines are ignored.
    pub fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if self.record_header_field(trimmed) {
            return;
        }

        if !self.in_data_section {
            self.in_data_section = is_column_header(trimmed);
            return;
        }

        if let Ok(entry) = parse_row(trimmed) {
            self.entries.push(entry);
        }
    }

    /// Whether the column header has been seen yet
    pub fn in_data_section(&self) -> bool {
        self.in_data_section
    }

    pub fn finish(self) -> Report {
        let total_samples = self
            .entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.flat));

        Report {
            entries: self.entries,
            unit: self.unit.unwrap_or_default(),
            total_samples,
            header: self.header,
        }
    }

    /// First occurrence of each header field wins.
    ///
    /// **Private** - internal helper for push_line
    fn record_header_field(&mut self, line: &str) -> bool {
        if let Some(rest) = line.strip_prefix(TYPE_PREFIX) {
            if self.unit.is_none() {
                self.unit = rest.split_whitespace().next().map(str::to_string);
            }
            return true;
        }

        let slot = if let Some(rest) = line.strip_prefix(FILE_PREFIX) {
            Some((&mut self.header.file, rest))
        } else if let Some(rest) = line.strip_prefix(TIME_PREFIX) {
            Some((&mut self.header.time, rest))
        } else if let Some(rest) = line.strip_prefix(DURATION_PREFIX) {
            Some((&mut self.header.duration, rest))
        } else {
            None
        };

        match slot {
            Some((field, rest)) => {
                let value = rest.trim();
                if field.is_none() && !value.is_empty() {
                    *field = Some(value.to_string());
                }
                true
            }
            None => false,
        }
    }
}

/// Check whether a line is the `flat flat% sum% cum cum%` column header
///
/// The tokens must appear in that relative order; other tokens may be
/// interleaved.
pub fn is_column_header(line: &str) -> bool {
    let mut expected = COLUMN_HEADER_TOKENS.iter().peekable();
    for token in line.split_whitespace() {
        if expected.peek().is_some_and(|want| **want == token) {
            expected.next();
        }
    }
    expected.peek().is_none()
}

/// Parse one data row: `value pct pct value pct name...`
///
/// **Public** - used by the builder, exposed for per-line testing
///
/// # Errors
/// * `ParseError::MalformedLine` - fewer than six fields
/// * `ParseError::UnrecognizedUnitSuffix` - a value has an unknown suffix
/// * `ParseError::InvalidNumber` - a numeric field does not parse
pub fn parse_row(line: &str) -> Result<Entry, ParseError> {
    let ([flat, flat_pct, sum_pct, cum, cum_pct], name) =
        split_row(line).ok_or(ParseError::MalformedLine)?;

    Ok(Entry {
        function_name: name.to_string(),
        flat: parse_quantity(flat)?.value,
        flat_percent: parse_percent(flat_pct)?,
        sum_percent: parse_percent(sum_pct)?,
        cum: parse_quantity(cum)?.value,
        cum_percent: parse_percent(cum_pct)?,
    })
}

/// Split off five leading fields; the remainder is the function name.
///
/// **Private** - whitespace inside the name is kept as printed
fn split_row(line: &str) -> Option<([&str; 5], &str)> {
    let mut rest = line.trim();
    let mut fields = [""; 5];

    for field in fields.iter_mut() {
        let end = rest.find(char::is_whitespace)?;
        *field = &rest[..end];
        rest = rest[end..].trim_start();
    }

    if rest.is_empty() {
        None
    } else {
        Some((fields, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_keeps_name_whitespace() {
        let (fields, name) =
            split_row("  1s 10% 10% 2s 20%  main.(*T).Method   func1  ").unwrap();
        assert_eq!(fields, ["1s", "10%", "10%", "2s", "20%"]);
        assert_eq!(name, "main.(*T).Method   func1");
    }

    #[test]
    fn test_split_row_needs_name() {
        assert!(split_row("1s 10% 10% 2s 20%").is_none());
        assert!(split_row("1s 10% 10%").is_none());
        assert!(split_row("").is_none());
    }

    #[test]
    fn test_parse_row() {
        let entry = parse_row("10.50s 52.50% 52.50%     10.50s 52.50%  main.fibonacci").unwrap();
        assert_eq!(entry.function_name, "main.fibonacci");
        assert_eq!(entry.flat, 10_500_000_000);
        assert_eq!(entry.cum, 10_500_000_000);
        assert!((entry.flat_percent - 52.5).abs() < 1e-9);
        assert!((entry.sum_percent - 52.5).abs() < 1e-9);
        assert!((entry.cum_percent - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_row_errors() {
        assert_eq!(parse_row("Dropped 12 nodes"), Err(ParseError::MalformedLine));
        assert!(matches!(
            parse_row("10furlongs 5% 5% 10furlongs 5% main.f"),
            Err(ParseError::UnrecognizedUnitSuffix(_))
        ));
        assert!(matches!(
            parse_row("1s abc 5% 1s 5% main.f"),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_row("flat flat% sum% cum cum% extra"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_is_column_header() {
        assert!(is_column_header("      flat  flat%   sum%        cum   cum%"));
        assert!(is_column_header("flat flat% sum% cum cum% name"));
        assert!(!is_column_header("cum cum% flat flat% sum%"));
        assert!(!is_column_header("flat flat% sum%"));
        assert!(!is_column_header("10.50s 52.50% 52.50% 10.50s 52.50% main.f"));
    }

    #[test]
    fn test_builder_ignores_rows_before_header() {
        let mut builder = ReportBuilder::new();
        builder.push_line("1s 50% 50% 1s 50% early.row");
        assert!(!builder.in_data_section());

        builder.push_line("flat flat% sum% cum cum%");
        assert!(builder.in_data_section());

        builder.push_line("1s 50% 50% 1s 50% late.row");
        let report = builder.finish();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].function_name, "late.row");
        assert_eq!(report.total_samples, 1_000_000_000);
    }

    #[test]
    fn test_first_header_field_wins() {
        let report = parse_report(
            "Type: cpu\nType: alloc_space\nFile: a\nFile: b\nTime: Nov 20, 2025 at 10:00am (CST)\n",
        );
        assert_eq!(report.unit, "cpu");
        assert_eq!(report.header.file.as_deref(), Some("a"));
        assert_eq!(
            report.header.time.as_deref(),
            Some("Nov 20, 2025 at 10:00am (CST)")
        );
        assert_eq!(report.header.duration, None);
    }

    #[test]
    fn test_empty_type_line_does_not_set_unit() {
        let report = parse_report("Type:\nType: inuse_space\n");
        assert_eq!(report.unit, "inuse_space");
    }

    #[test]
    fn test_total_saturates() {
        let text = "flat flat% sum% cum cum%\n\
                    18446744073709551615 50% 50% 1 50% a\n\
                    10 50% 100% 1 50% b\n";
        let report = parse_report(text);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.total_samples, u64::MAX);
    }
}
