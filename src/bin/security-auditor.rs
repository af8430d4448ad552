use anyhow::Context;
use clap::Parser;
use security_auditor::{
    analyzer::OpenAiAnalyzer,
    config::{AuditorConfig, Credentials, debug_print_config},
    pipeline::{self, PipelineOptions, RunOutcome},
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize a Trivy scan into a Markdown security audit report")]
struct Args {
    /// Trivy JSON results to analyze (default: from config, else trivy-results.json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the Markdown report (default: from config, else security-audit-report.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Completion model override
    #[arg(short, long)]
    model: Option<String>,

    /// Config file (overrides SECURITY_AUDITOR_CONFIG)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // uses RUST_LOG
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // .env is optional
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let Some(creds) = Credentials::from_env() else {
        println!("Error: OPENAI_API_KEY environment variable not set");
        return Ok(());
    };

    let mut cfg = match &args.config {
        Some(path) => AuditorConfig::load_from(path, true)?,
        None => AuditorConfig::load()?,
    };

    if let Some(input) = args.input {
        cfg.input.path = input;
    }
    if let Some(output) = args.output {
        cfg.report.path = output;
    }
    if let Some(model) = args.model {
        cfg.analyzer.model = model;
    }
    cfg.analyzer
        .validate()
        .map_err(anyhow::Error::msg)
        .context("validating analyzer settings")?;
    debug_print_config(&cfg, &creds);

    let options = PipelineOptions {
        input: cfg.input.path.clone(),
        output: cfg.report.path.clone(),
    };
    let analyzer = OpenAiAnalyzer::new(creds.openai_api_key, cfg.analyzer)
        .context("creating analyzer client")?;

    match pipeline::run(&options, &analyzer)? {
        RunOutcome::ReportWritten { path, .. } => {
            println!(
                "✅ Security audit complete! Report saved to {}",
                path.display()
            );
        }
        RunOutcome::InputMissing { .. } => {
            println!("❌ Trivy results file not found. Run Trivy scan first.");
        }
    }

    Ok(())
}
