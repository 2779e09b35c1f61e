//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use trigsum_orchestration::report::ComparisonReport;

/// Format a series value with 15 decimals.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.15}")
}

/// Format an error magnitude in scientific notation.
#[must_use]
pub fn format_error(value: f64) -> String {
    format!("{value:.10e}")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Serialize a report as pretty JSON.
///
/// # Errors
///
/// Returns a serialization error; cannot happen for well-formed reports.
pub fn report_to_json(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write the JSON report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, report: &ComparisonReport) -> io::Result<()> {
    let json = report_to_json(report)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
