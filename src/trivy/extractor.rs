use crate::models::scan_report::{field_str, vulnerabilities_of};
use crate::models::vulnerability_record::truncate_description;
use crate::models::{ScanReport, VulnerabilityRecord};
use serde_json::Value;
use tracing::debug;

/// Flatten every `Results[*].Vulnerabilities[*]` entry into a record.
///
/// Order follows the input; nothing is sorted, filtered or deduplicated.
/// Missing fields never fail extraction.
pub fn extract_vulnerabilities(report: &ScanReport) -> Vec<VulnerabilityRecord> {
    let records: Vec<VulnerabilityRecord> = report
        .results()
        .iter()
        .flat_map(vulnerabilities_of)
        .map(to_record)
        .collect();

    debug!(
        "Extracted {} vulnerabilities from {} result groups",
        records.len(),
        report.results().len()
    );
    records
}

fn to_record(entry: &Value) -> VulnerabilityRecord {
    let owned = |key: &str| field_str(entry, key).map(str::to_string);

    VulnerabilityRecord {
        id: owned("VulnerabilityID"),
        severity: owned("Severity"),
        package: owned("PkgName"),
        version: owned("InstalledVersion"),
        fixed_version: owned("FixedVersion"),
        title: owned("Title"),
        description: truncate_description(field_str(entry, "Description").unwrap_or_default()),
    }
}
