/**
 * Completion API Client
 *
 * Outbound call to an OpenAI-compatible chat completions endpoint. The
 * `CompletionClient` trait is the seam: the production implementation is
 * a thin reqwest wrapper, and tests substitute a stub (or point the base
 * URL at a local mock server).
 */
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::server::config::GenerationConfig;

/// Completion request parameters, fixed for this product
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Completion call failure
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned status {0}")]
    Status(u16),
    #[error("completion API returned no content")]
    Empty,
}

/// Seam for the outbound completion call
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one system+user exchange and return the completion text
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// reqwest-backed client for an OpenAI-compatible API
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("completion API error {status}: {detail}");
            return Err(GenerationError::Status(status.as_u16()));
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::Empty)
    }
}
