//! Value and percentage tokens from the report table.
//!
//! Values carry an optional magnitude suffix (`10.50s`, `512.50MB`, `42`).
//! The suffix is resolved through `UNIT_SUFFIXES`; adding a unit is one
//! table row. Durations normalize to nanoseconds, memory to bytes.

use crate::utils::config::{MEMORY_UNIT_BASE, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_SEC};
use crate::utils::error::ParseError;

/// What a value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Nanoseconds
    Duration,
    /// Bytes
    Memory,
    /// Unscaled sample count
    Count,
}

/// One recognized suffix and its scale to the base unit
#[derive(Debug, Clone, Copy)]
pub struct UnitSuffix {
    pub suffix: &'static str,
    pub dimension: Dimension,
    pub multiplier: u64,
}

const KIB: u64 = MEMORY_UNIT_BASE;
const MIB: u64 = KIB * MEMORY_UNIT_BASE;
const GIB: u64 = MIB * MEMORY_UNIT_BASE;
const TIB: u64 = GIB * MEMORY_UNIT_BASE;

const fn unit(suffix: &'static str, dimension: Dimension, multiplier: u64) -> UnitSuffix {
    UnitSuffix {
        suffix,
        dimension,
        multiplier,
    }
}

/// Every suffix pprof prints for time and space samples
pub static UNIT_SUFFIXES: &[UnitSuffix] = &[
    unit("ns", Dimension::Duration, 1),
    unit("us", Dimension::Duration, NANOS_PER_MICRO),
    unit("µs", Dimension::Duration, NANOS_PER_MICRO),
    unit("μs", Dimension::Duration, NANOS_PER_MICRO),
    unit("ms", Dimension::Duration, NANOS_PER_MILLI),
    unit("s", Dimension::Duration, NANOS_PER_SEC),
    unit("mins", Dimension::Duration, 60 * NANOS_PER_SEC),
    unit("hrs", Dimension::Duration, 3_600 * NANOS_PER_SEC),
    unit("B", Dimension::Memory, 1),
    unit("kB", Dimension::Memory, KIB),
    unit("KB", Dimension::Memory, KIB),
    unit("MB", Dimension::Memory, MIB),
    unit("GB", Dimension::Memory, GIB),
    unit("TB", Dimension::Memory, TIB),
];

/// Look up a suffix; the empty suffix is a bare count
pub fn lookup_suffix(suffix: &str) -> Option<UnitSuffix> {
    if suffix.is_empty() {
        return Some(unit("", Dimension::Count, 1));
    }
    UNIT_SUFFIXES.iter().copied().find(|u| u.suffix == suffix)
}

/// A value token converted to its base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub value: u64,
    pub dimension: Dimension,
}

/// Parse a value token such as `10.50s`, `128.13MB` or `1500`.
///
/// Fractional results are rounded to the nearest base unit.
///
/// # Errors
/// * `ParseError::UnrecognizedUnitSuffix` - suffix not in `UNIT_SUFFIXES`
/// * `ParseError::InvalidNumber` - numeric part missing, negative or out of range
pub fn parse_quantity(token: &str) -> Result<Quantity, ParseError> {
    let split = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let (number, suffix) = token.split_at(split);

    if number.is_empty() {
        return Err(ParseError::InvalidNumber(token.to_string()));
    }

    let scale = lookup_suffix(suffix)
        .ok_or_else(|| ParseError::UnrecognizedUnitSuffix(suffix.to_string()))?;

    let scaled = if number.contains('.') {
        scale_decimal(number, scale.multiplier)
    } else {
        number
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(scale.multiplier))
    };
    let value = scaled.ok_or_else(|| ParseError::InvalidNumber(token.to_string()))?;

    Ok(Quantity {
        value,
        dimension: scale.dimension,
    })
}

fn scale_decimal(number: &str, multiplier: u64) -> Option<u64> {
    let parsed: f64 = number.parse().ok()?;
    let scaled = (parsed * multiplier as f64).round();
    // u64::MAX is not representable; its f64 neighbour is 2^64
    if !scaled.is_finite() || scaled < 0.0 || scaled >= u64::MAX as f64 {
        return None;
    }
    Some(scaled as u64)
}

/// Parse a percentage token: `52.50%`, `100%`, or a bare `100`.
pub fn parse_percent(token: &str) -> Result<f64, ParseError> {
    let number = token.strip_suffix('%').unwrap_or(token);
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber(token.to_string())),
    }
}
