use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use aprs_decode::report::CheckReport;

/// Decode every line of `file` and print a summary of the results
pub fn handle_check(file: &Path, json: bool, top: usize) -> Result<()> {
    info!("Checking packets in {}", file.display());

    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read packet file {}", file.display()))?;

    let report = CheckReport::from_lines(&contents, Utc::now());
    let summary = report.summary(top);

    if summary.total == 0 {
        warn!("No packets found in {}", file.display());
    }
    info!(
        passed = summary.passed,
        failed = summary.failed,
        unknown = summary.unknown,
        "Finished checking {} lines in {}ms",
        summary.total,
        summary.elapsed_ms
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
