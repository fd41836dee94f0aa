//! Text formatting helpers for displaying report values.

use crate::parser::schema::Report;

/// Compact magnitude: `1.50M`, `2.00K`, or the raw number below 1000
pub fn format_value(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.2}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.2}K", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

/// Two-decimal percentage with a `%` sign
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Shorten a symbol name for narrow columns.
///
/// Falls back to the last dot-separated segment, then cuts that segment
/// and appends `...`. The result never exceeds `max_len` characters; below
/// three there is no room for the ellipsis and the segment is just cut.
pub fn truncate_function_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }

    let func_name = name.rsplit('.').next().unwrap_or(name);
    if func_name.chars().count() <= max_len {
        return func_name.to_string();
    }

    if max_len < 3 {
        return func_name.chars().take(max_len).collect();
    }

    let keep = max_len - 3;
    let mut truncated: String = func_name.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Plain-text listing of the first `max_lines` entries
pub fn format_summary(report: &Report, max_lines: usize) -> String {
    let mut lines = Vec::new();

    let unit = if report.unit.is_empty() {
        "unknown"
    } else {
        report.unit.as_str()
    };
    lines.push(format!(
        "Type: {} | Total: {} | Entries: {}",
        unit,
        format_value(report.total_samples),
        report.entries.len()
    ));

    if report.is_empty() {
        lines.push("No entries parsed".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "{:<40} {:>10} {:>8} {:>8} {:>10} {:>8}",
        "Function", "Flat", "Flat%", "Sum%", "Cum", "Cum%"
    ));
    lines.push("-".repeat(89));

    for entry in report.top(max_lines) {
        lines.push(format!(
            "{:<40} {:>10} {:>8} {:>8} {:>10} {:>8}",
            truncate_function_name(&entry.function_name, 40),
            format_value(entry.flat),
            format_percent(entry.flat_percent),
            format_percent(entry.sum_percent),
            format_value(entry.cum),
            format_percent(entry.cum_percent)
        ));
    }

    if report.len() > max_lines {
        lines.push(format!("... {} more", report.len() - max_lines));
    }

    lines.join("\n")
}
