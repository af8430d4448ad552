use crate::models::VulnerabilityRecord;
use anyhow::{Context, Result};

pub const ANALYSIS_PROMPT: &str = r#"Analyze these {count} security vulnerabilities from a Trivy container scan:

{vulnerabilities_json}

Provide:
1. Executive Summary
2. Top 5 Critical Issues (prioritized by risk)
3. Specific fix commands
4. Prevention strategies
"#;

/// User prompt with the record count and the records as indented JSON
pub fn build_prompt(records: &[VulnerabilityRecord]) -> Result<String> {
    let vulnerabilities_json =
        serde_json::to_string_pretty(records).context("serializing vulnerabilities for prompt")?;

    Ok(ANALYSIS_PROMPT
        .replace("{count}", &records.len().to_string())
        .replace("{vulnerabilities_json}", &vulnerabilities_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, severity: &str) -> VulnerabilityRecord {
        VulnerabilityRecord {
            id: Some(id.to_string()),
            severity: Some(severity.to_string()),
            package: Some("busybox".to_string()),
            version: Some("1.36.1-r15".to_string()),
            fixed_version: None,
            title: Some("busybox: use-after-free in awk".to_string()),
            description: "A use-after-free vulnerability was discovered.".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_count_and_records() {
        let records = vec![record("CVE-2023-42363", "MEDIUM"), record("CVE-2023-42366", "HIGH")];
        let prompt = build_prompt(&records).unwrap();

        assert!(prompt.starts_with("Analyze these 2 security vulnerabilities"));
        assert!(prompt.contains("\"id\": \"CVE-2023-42363\""));
        assert!(prompt.contains("\"severity\": \"HIGH\""));
        assert!(prompt.contains("\"fixed_version\": null"));
    }

    #[test]
    fn test_prompt_lists_instructions_in_order() {
        let prompt = build_prompt(&[record("CVE-1", "LOW")]).unwrap();

        let positions: Vec<usize> = [
            "1. Executive Summary",
            "2. Top 5 Critical Issues (prioritized by risk)",
            "3. Specific fix commands",
            "4. Prevention strategies",
        ]
        .iter()
        .map(|item| prompt.find(item).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_prompt_for_empty_list() {
        let prompt = build_prompt(&[]).unwrap();
        assert!(prompt.starts_with("Analyze these 0 security vulnerabilities"));
        assert!(prompt.contains("\n[]\n"));
    }

    #[test]
    fn test_records_serialized_with_indentation() {
        let prompt = build_prompt(&[record("CVE-1", "LOW")]).unwrap();
        assert!(prompt.contains("[\n  {\n    \"id\": \"CVE-1\","));
    }
}
