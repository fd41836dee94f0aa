//! Configuration and constants for the parser and CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of entries shown in summaries
pub const DEFAULT_TOP_N: usize = 20;

/// Upper bound accepted for `--top`
pub const MAX_TOP_N: usize = 1000;

// pprof scales memory samples by powers of 1024 (B, kB, MB, ...)
pub const MEMORY_UNIT_BASE: u64 = 1024;

pub const NANOS_PER_MICRO: u64 = 1_000;
pub const NANOS_PER_MILLI: u64 = 1_000_000;
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Column header tokens, in the order pprof prints them
pub const COLUMN_HEADER_TOKENS: &[&str] = &["flat", "flat%", "sum%", "cum", "cum%"];

// Header block prefixes
pub const TYPE_PREFIX: &str = "Type:";
pub const FILE_PREFIX: &str = "File:";
pub const TIME_PREFIX: &str = "Time:";
pub const DURATION_PREFIX: &str = "Duration:";

/// Input path meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Source label recorded for stdin input
pub const STDIN_SOURCE: &str = "<stdin>";
