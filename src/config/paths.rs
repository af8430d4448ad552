use serde::Deserialize;
use std::path::PathBuf;

/// Where the scanner output is read from (`[input]`).
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

/// Where the Markdown report is written (`[report]`).
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("trivy-results.json")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("security-audit-report.md")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}
