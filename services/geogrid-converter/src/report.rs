//! Human-readable and JSON output of a conversion run.

use std::fmt::Write;

use geogrid_common::LevelStats;

use crate::config::{ConverterConfig, ReportFormat};
use crate::pipeline::ConversionOutcome;

/// Status line printed once the tile has been decoded.
pub const READ_STATUS_OK: &str = "Read geogrid status: 0";

/// The settings block printed with `--verbose`.
pub fn format_config(config: &ConverterConfig) -> String {
    let tile = &config.tile;
    let mut out = String::new();

    let _ = writeln!(out, "Input file:\t\t{}", tile.path.display());
    let _ = writeln!(out, "output file:\t\t{}", config.output.display());
    let _ = writeln!(out, "Grid NX:\t\t{}", tile.nx);
    let _ = writeln!(out, "Grid NY:\t\t{}", tile.ny);
    let _ = writeln!(out, "Grid NZ:\t\t{}", tile.nz);
    let _ = writeln!(out, "Word size:\t\t{}", tile.word_size);
    let _ = writeln!(out, "Scale factor:\t\t{:.6}", tile.scale);
    let _ = writeln!(out, "Signed:\t\t\t{}", if tile.signed { "yes" } else { "no" });
    let _ = writeln!(out, "Endianness:\t\t{}", tile.endianness);

    out
}

/// Statistics in the requested format, newline terminated.
pub fn format_stats(stats: &[LevelStats], format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(stats
            .iter()
            .map(|s| s.report_line() + "\n")
            .collect()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(stats)? + "\n"),
    }
}

/// Full stdout report: read status, dataset steps, statistics.
pub fn format_outcome(outcome: &ConversionOutcome, format: ReportFormat) -> serde_json::Result<String> {
    let mut out = String::new();
    out.push_str(READ_STATUS_OK);
    out.push('\n');
    out.push_str(&outcome.write_report.to_string());
    out.push_str(&format_stats(&outcome.stats, format)?);
    Ok(out)
}
