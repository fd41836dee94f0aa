//! Structured report types produced by the text parser.
//!
//! These are plain values: built once by `parse_report`, never mutated.
//! They serialize to JSON as part of a `ReportDocument`.

use serde::{Deserialize, Serialize};

/// One parsed row of the `flat flat% sum% cum cum%` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Symbol name exactly as printed (package dots, slashes, brackets kept)
    pub function_name: String,

    /// Self time/space in the base unit (ns, bytes or raw count)
    pub flat: u64,

    /// `flat` as a percentage of the report total
    pub flat_percent: f64,

    /// Running total of `flat_percent` up to and including this row
    pub sum_percent: f64,

    /// Time/space including callees, in the base unit
    pub cum: u64,

    /// `cum` as a percentage of the report total
    pub cum_percent: f64,
}

/// Optional header-block metadata printed above the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Parse result for one report text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Rows in source order
    pub entries: Vec<Entry>,

    /// Sample type from the `Type:` line (e.g. `cpu`), empty if absent
    pub unit: String,

    /// Sum of all entries' `flat` values
    pub total_samples: u64,

    #[serde(default)]
    pub header: ReportHeader,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First `n` entries in source order (fewer if the report is shorter)
    pub fn top(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }
}
