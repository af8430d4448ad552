//! Narrative analysis of extracted vulnerabilities by a completion service.

pub mod openai;
pub mod prompt;

pub use openai::OpenAiAnalyzer;
pub use prompt::build_prompt;

use crate::models::{Analysis, VulnerabilityRecord};
use anyhow::Result;

/// Produces a narrative for a list of findings.
///
/// A service-side rejection is reported as [`Analysis::Failed`]; only
/// transport failures come back as `Err`.
pub trait Analyzer {
    fn analyze(&self, records: &[VulnerabilityRecord]) -> Result<Analysis>;
}
