use serde_json::Value;

/// Raw Trivy JSON output, kept as loaded.
///
/// Nothing is validated up front; every lookup goes through an accessor that
/// treats a missing or mistyped key as empty.
#[derive(Debug, Clone)]
pub struct ScanReport(Value);

impl ScanReport {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Top-level `ArtifactName` (image reference or path that was scanned)
    pub fn artifact_name(&self) -> Option<&str> {
        field_str(&self.0, "ArtifactName")
    }

    /// Entries of the top-level `Results` array, empty when absent
    pub fn results(&self) -> &[Value] {
        field_array(&self.0, "Results")
    }
}

/// Entries of the `Vulnerabilities` array inside one result group
pub fn vulnerabilities_of(result: &Value) -> &[Value] {
    field_array(result, "Vulnerabilities")
}

/// String value stored under `key`, or `None` if missing or not a string
pub fn field_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn field_array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
