use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AWS DevOps Security Auditor.";

/// Settings for the completion request.
///
/// Loaded from `[analyzer]` in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Full chat completions URL
    pub endpoint: String,
    pub model: String,
    /// System message sent ahead of the prompt
    pub system_prompt: String,
    /// Response length cap
    pub max_tokens: u32,
    /// Sampling temperature; kept low for focused output
    pub temperature: f32,
    /// Whole-request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: 2000,
            temperature: 0.3,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AnalyzerConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout.as_secs()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("analyzer endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("analyzer model must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("analyzer max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "analyzer temperature {} is outside 0.0-2.0",
                self.temperature
            ));
        }
        Ok(())
    }
}
