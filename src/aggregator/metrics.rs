//! Derived statistics over a parsed report.
//!
//! The display layer slices the top entries and wants a feel for how
//! concentrated the profile is. Neither changes the report itself.

use crate::parser::schema::{Entry, Report};
use log::debug;

/// Take the first `top_n` entries of a report
///
/// **Public** - main entry point for top-N slicing
///
/// Entries keep their source order; pprof already lists them hottest first.
pub fn top_entries(report: &Report, top_n: usize) -> Vec<Entry> {
    debug!(
        "Selecting top {} of {} entries",
        top_n,
        report.entries.len()
    );
    report.top(top_n).to_vec()
}

/// Calculate flat value distribution statistics
///
/// **Public** - provides summary statistics
///
/// # Arguments
/// * `report` - Parsed report
///
/// # Returns
/// Statistics about how flat time/space is spread across entries
pub fn calculate_flat_distribution(report: &Report) -> FlatDistribution {
    if report.is_empty() {
        return FlatDistribution::default();
    }

    let total = report.total_samples;
    let count = report.entries.len();
    let mean = total / count as u64;

    let mut flats: Vec<u64> = report.entries.iter().map(|e| e.flat).collect();
    flats.sort_unstable();
    let median = flats[flats.len() / 2];

    // Top 10% of entries by flat, regardless of source order
    let top_10_percent_count = (count as f64 * 0.1).ceil() as usize;
    let top_10_percent_flat = flats
        .iter()
        .rev()
        .take(top_10_percent_count)
        .fold(0u64, |acc, v| acc.saturating_add(*v));

    FlatDistribution {
        total_flat: total,
        entry_count: count,
        mean_flat: mean,
        median_flat: median,
        top_10_percent_flat,
        top_10_percent_percentage: if total > 0 {
            (top_10_percent_flat as f64 / total as f64) * 100.0
        } else {
            0.0
        },
    }
}

/// Flat distribution statistics
///
/// **Public** - returned from calculate_flat_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatDistribution {
    /// Sum of flat values across entries
    pub total_flat: u64,

    /// Number of entries
    pub entry_count: usize,

    /// Mean flat per entry
    pub mean_flat: u64,

    /// Median flat per entry
    pub median_flat: u64,

    /// Flat attributed to the hottest 10% of entries
    pub top_10_percent_flat: u64,

    /// Percentage of total flat in the hottest 10%
    pub top_10_percent_percentage: f64,
}

impl FlatDistribution {
    /// Check if the profile is dominated by a few functions
    ///
    /// Returns true if the hottest 10% of entries hold >80% of flat
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Entries: {} | Mean: {} | Median: {} | Top 10%: {:.1}%",
            self.total_flat,
            self.entry_count,
            self.mean_flat,
            self.median_flat,
            self.top_10_percent_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(flats: &[u64]) -> Report {
        let entries: Vec<Entry> = flats
            .iter()
            .enumerate()
            .map(|(i, flat)| Entry {
                function_name: format!("main.f{}", i),
                flat: *flat,
                flat_percent: 0.0,
                sum_percent: 0.0,
                cum: *flat,
                cum_percent: 0.0,
            })
            .collect();
        Report {
            total_samples: flats.iter().sum(),
            entries,
            ..Default::default()
        }
    }

    #[test]
    fn test_top_entries() {
        let report = report_with(&[5000, 3000, 2000]);
        let top = top_entries(&report, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].function_name, "main.f0");
        assert_eq!(top[1].flat, 3000);
    }

    #[test]
    fn test_calculate_flat_distribution() {
        let report = report_with(&[8500, 1000, 250, 250]);
        let dist = calculate_flat_distribution(&report);

        assert_eq!(dist.total_flat, 10000);
        assert_eq!(dist.entry_count, 4);
        assert_eq!(dist.mean_flat, 2500);
        assert_eq!(dist.median_flat, 1000);
        assert_eq!(dist.top_10_percent_flat, 8500);
        assert!(dist.is_highly_concentrated());
    }

    #[test]
    fn test_flat_distribution_empty() {
        let dist = calculate_flat_distribution(&Report::default());
        assert_eq!(dist.total_flat, 0);
        assert_eq!(dist.entry_count, 0);
        assert!(!dist.is_highly_concentrated());
    }

    #[test]
    fn test_summary_mentions_counts() {
        let dist = calculate_flat_distribution(&report_with(&[10, 10]));
        assert!(dist.summary().contains("Entries: 2"));
    }
}
