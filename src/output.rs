//! Console rendering for the ranked congestion report.
//!
//! Supports the plain-text format (day and hour sections with ranked light
//! lines) and JSON serialization of the same report.

use anyhow::Result;
use tracing::debug;

use crate::ranking::RankedReport;

/// Renders the report in its console form:
///
/// ```text
/// Top Congested Traffic Lights Per Hour:
/// Hour 08:00
///   L1: 7 cars
///   L2: 3 cars
/// ```
///
/// In the dated variant each day's hours are preceded by a `Day YYYY-MM-DD`
/// header. Empty buckets never made it into the report, so nothing is skipped
/// here.
pub fn render_text(report: &RankedReport) -> String {
    let mut out = String::from("Top Congested Traffic Lights Per Hour:\n");

    let mut current_day = None;
    for group in &report.groups {
        if let Some(day) = group.day {
            if current_day != Some(day) {
                current_day = Some(day);
                out.push_str(&format!("Day {}\n", day.format("%Y-%m-%d")));
            }
        }
        out.push_str(&format!("Hour {:02}:00\n", group.hour));
        for light in &group.top {
            out.push_str(&format!("  {}: {} cars\n", light.light_id, light.cars));
        }
    }

    out
}

/// Prints the text report to stdout.
pub fn print_text(report: &RankedReport) {
    debug!(groups = report.groups.len(), "Rendering text report");
    print!("{}", render_text(report));
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(report: &RankedReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the JSON report to stdout.
pub fn print_json(report: &RankedReport) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}
