//! Aggregation of parsed reports for display.

pub mod metrics;

pub use metrics::{calculate_flat_distribution, top_entries, FlatDistribution};
