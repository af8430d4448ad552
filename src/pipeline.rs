use crate::analyzer::Analyzer;
use crate::models::SeverityTally;
use crate::report::{render_report, write_report};
use crate::trivy::{LoadError, ScanLoader, extract_vulnerabilities};
use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    ReportWritten { path: PathBuf, total: usize },
    /// Input file absent; nothing was analyzed or written
    InputMissing { path: PathBuf },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::ReportWritten { .. })
    }
}

/// Load → extract → analyze → render/write, once.
///
/// A missing input is reported through [`RunOutcome::InputMissing`]; parse
/// errors and transport failures from the analyzer are returned as `Err`
/// before anything is written.
pub fn run(options: &PipelineOptions, analyzer: &dyn Analyzer) -> Result<RunOutcome> {
    info!("🔍 Starting security audit of {}", options.input.display());

    let scan = match ScanLoader::load(&options.input) {
        Ok(scan) => scan,
        Err(LoadError::NotFound(path)) => {
            warn!("Scan results not found at {}", path.display());
            return Ok(RunOutcome::InputMissing { path });
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(artifact) = scan.artifact_name() {
        debug!("📋 Artifact: {}", artifact);
    }

    let records = extract_vulnerabilities(&scan);
    drop(scan);

    let tally = SeverityTally::from_records(&records);
    info!("Found {}", tally);

    let analysis = analyzer.analyze(&records)?;
    if analysis.is_degraded() {
        warn!("⚠️  AI analysis unavailable; report will contain the service error");
    }

    let report = render_report(&analysis, &records, Local::now());
    write_report(&options.output, &report)?;

    info!("✅ Security audit completed: {}", tally);

    Ok(RunOutcome::ReportWritten {
        path: options.output.clone(),
        total: records.len(),
    })
}
