use super::Analyzer;
use super::prompt::build_prompt;
use crate::config::AnalyzerConfig;
use crate::models::{Analysis, VulnerabilityRecord};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiAnalyzer {
    client: Client,
    api_key: String,
    config: AnalyzerConfig,
}

impl OpenAiAnalyzer {
    pub fn new(api_key: impl Into<String>, config: AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Sends `prompt` as the user turn and returns the first completion.
    ///
    /// Non-200 responses become [`Analysis::Failed`] carrying the raw body.
    pub fn complete(&self, prompt: &str) -> Result<Analysis> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        info!(
            "🤖 Requesting analysis from {} (model {})",
            self.config.endpoint, self.config.model
        );

        let res = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .with_context(|| format!("failed to send POST to {}", self.config.endpoint))?;

        let status = res.status();
        debug!("Completion endpoint responded with {}", status);

        if status != StatusCode::OK {
            let body = res
                .text()
                .with_context(|| format!("reading {} response body", status))?;
            warn!("⚠️  Analysis request failed with {}: {}", status, body);
            return Ok(Analysis::Failed {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = res.json().context("parsing completion response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .context("completion response contained no choices")?
            .message
            .content
            .unwrap_or_default();

        Ok(Analysis::Completed(content))
    }
}

impl Analyzer for OpenAiAnalyzer {
    fn analyze(&self, records: &[VulnerabilityRecord]) -> Result<Analysis> {
        let prompt = build_prompt(records)?;
        debug!("Prompt is {} characters for {} records", prompt.len(), records.len());
        self.complete(&prompt)
    }
}
