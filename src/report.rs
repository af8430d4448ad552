use crate::models::{Analysis, SeverityTally, VulnerabilityRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use tracing::info;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the Markdown audit report.
///
/// Severities are listed in the order they first appear in `records`.
pub fn render_report(
    analysis: &Analysis,
    records: &[VulnerabilityRecord],
    generated_at: DateTime<Local>,
) -> String {
    let tally = SeverityTally::from_records(records);

    let mut report = format!(
        "# 🛡️ Security Audit Report\n\
         **Generated**: {}\n\
         **Total Vulnerabilities**: {}\n\
         \n\
         ## 🤖 AI Analysis\n\
         {}\n\
         \n\
         ## 📊 Vulnerability Breakdown\n",
        generated_at.format(TIMESTAMP_FORMAT),
        records.len(),
        analysis,
    );

    for (severity, count) in tally.iter() {
        report.push_str(&format!("- **{}**: {}\n", severity, count));
    }

    report
}

/// Write `contents` to `path`, replacing any existing file
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("writing report to {}", path.display()))?;
    info!("📝 Report written to {}", path.display());
    Ok(())
}
