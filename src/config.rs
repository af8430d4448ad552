mod analyzer;
mod paths;

pub use analyzer::*;
pub use paths::*;

use anyhow::{Context, Result};
use config::Config;
use serde::Deserialize;
use std::env;
use tracing::debug;

pub const CONFIG_ENV_VAR: &str = "SECURITY_AUDITOR_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "security-auditor.toml";

/// Top-level configuration.
///
/// Sections of the TOML file:
/// - `[input]`    → `InputConfig`
/// - `[report]`   → `ReportConfig`
/// - `[analyzer]` → `AnalyzerConfig`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuditorConfig {
    pub input: InputConfig,
    pub report: ReportConfig,
    pub analyzer: AnalyzerConfig,
}

impl AuditorConfig {
    /// Loads configuration from the file named by `SECURITY_AUDITOR_CONFIG`
    /// (default `security-auditor.toml`, optional) layered under
    /// `SECURITY_AUDITOR__*` environment variables.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path, false)
    }

    /// Like [`AuditorConfig::load`] but reads `config_path`. When `required`
    /// is set a missing file is an error instead of falling back to defaults.
    pub fn load_from(config_path: &str, required: bool) -> Result<Self> {
        debug!("Loading configuration from {}", config_path);

        let settings = Config::builder()
            .add_source(config::File::with_name(config_path).required(required))
            .add_source(
                config::Environment::with_prefix("SECURITY_AUDITOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("loading configuration from {}", config_path))?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("parsing configuration")?;

        cfg.analyzer
            .validate()
            .map_err(anyhow::Error::msg)
            .context("validating [analyzer] section")?;

        Ok(cfg)
    }
}

/// Secrets read from the process environment (after `.env` is applied).
#[derive(Deserialize)]
pub struct Credentials {
    pub openai_api_key: String,
}

impl Credentials {
    /// Reads `OPENAI_API_KEY`. Returns `None` when it is unset or blank.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Option<Self> {
        envy::from_iter::<_, Self>(vars)
            .ok()
            .filter(|creds| !creds.openai_api_key.trim().is_empty())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .finish()
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

pub fn debug_print_config(cfg: &AuditorConfig, creds: &Credentials) {
    debug!("🔧 Loaded Configuration:");
    debug!("  [input]");
    debug!("    path = {}", cfg.input.path.display());
    debug!("  [report]");
    debug!("    path = {}", cfg.report.path.display());
    debug!("  [analyzer]");
    debug!("    endpoint = {}", cfg.analyzer.endpoint);
    debug!("    model = {}", cfg.analyzer.model);
    debug!("    max_tokens = {}", cfg.analyzer.max_tokens);
    debug!("    temperature = {}", cfg.analyzer.temperature);
    debug!("    timeout = {}s", cfg.analyzer.timeout_seconds());
    debug!("    api_key = {}", mask(&creds.openai_api_key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let cfg = AuditorConfig::load_from(path.to_str().unwrap(), false).unwrap();
        assert_eq!(cfg.input.path, PathBuf::from("trivy-results.json"));
        assert_eq!(cfg.report.path, PathBuf::from("security-audit-report.md"));
        assert_eq!(cfg.analyzer.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auditor.toml");
        fs::write(
            &path,
            r#"
[input]
path = "scans/image.json"

[analyzer]
model = "gpt-4o"
temperature = 0.1
timeout = "45s"
"#,
        )
        .unwrap();

        let cfg = AuditorConfig::load_from(path.to_str().unwrap(), true).unwrap();
        assert_eq!(cfg.input.path, PathBuf::from("scans/image.json"));
        assert_eq!(cfg.report.path, PathBuf::from("security-audit-report.md"));
        assert_eq!(cfg.analyzer.model, "gpt-4o");
        assert_eq!(cfg.analyzer.timeout, Duration::from_secs(45));
        assert_eq!(cfg.analyzer.max_tokens, 2000);
        assert_eq!(cfg.analyzer.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_analyzer_section_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[analyzer]\nmax_tokens = 0\n").unwrap();

        let err = AuditorConfig::load_from(path.to_str().unwrap(), true).unwrap_err();
        assert!(format!("{:#}", err).contains("max_tokens"));
    }

    #[test]
    fn test_required_file_must_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = AuditorConfig::load_from(path.to_str().unwrap(), true).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.toml"));
    }

    #[test]
    fn test_credentials_from_vars() {
        let vars = |key: &str| {
            vec![
                ("PATH".to_string(), "/usr/bin".to_string()),
                ("OPENAI_API_KEY".to_string(), key.to_string()),
            ]
        };

        let creds = Credentials::from_vars(vars("sk-test")).unwrap();
        assert_eq!(creds.openai_api_key, "sk-test");
        assert!(Credentials::from_vars(vars("   ")).is_none());
        assert!(Credentials::from_vars(Vec::new()).is_none());
    }

    #[test]
    fn test_credentials_debug_is_masked() {
        let creds = Credentials {
            openai_api_key: "sk-secret".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("*********"));
    }
}
