use serde::{Deserialize, Serialize};

/// Maximum number of characters of a description carried into a record
pub const DESCRIPTION_LIMIT: usize = 200;

/// One vulnerability finding normalized from a Trivy result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    /// CVE / GHSA identifier (`VulnerabilityID`)
    pub id: Option<String>,
    /// Scanner severity label, e.g. LOW, MEDIUM, HIGH, CRITICAL
    pub severity: Option<String>,
    /// Affected package name (`PkgName`)
    pub package: Option<String>,
    /// Installed version of the package
    pub version: Option<String>,
    /// First fixed version, `None` when no fix is available
    pub fixed_version: Option<String>,
    pub title: Option<String>,
    /// Description cut to [`DESCRIPTION_LIMIT`] characters
    pub description: String,
}

impl VulnerabilityRecord {
    /// Label used when tallying; records without a severity count as UNKNOWN
    pub fn severity_label(&self) -> &str {
        self.severity.as_deref().unwrap_or("UNKNOWN")
    }

    pub fn has_fix(&self) -> bool {
        self.fixed_version
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}

/// Keep the first `DESCRIPTION_LIMIT` characters of `text`
pub fn truncate_description(text: &str) -> String {
    text.chars().take(DESCRIPTION_LIMIT).collect()
}
