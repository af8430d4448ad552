use std::fmt;

/// Outcome of asking the completion service to analyze a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// Completion text, returned verbatim
    Completed(String),
    /// The service answered with a non-200 status; rendered into the report
    /// in place of the narrative
    Failed { status: u16, body: String },
}

impl Analysis {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Analysis::Failed { .. })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Completed(text) => write!(f, "{}", text),
            Analysis::Failed { status, body } => write!(f, "Error: {} - {}", status, body),
        }
    }
}
