//! DeepInfra chat completion client.
//!
//! Implements the `CompletionTransport` trait against the OpenAI-compatible
//! chat completions endpoint. One POST per call, no streaming, no retries.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatConfig, ChatError, CompletionTransport, Turn};

pub(crate) const COMPLETIONS_URL: &str = "https://api.deepinfra.com/v1/openai/chat/completions";

/// Chat completion API client.
pub struct CompletionClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl CompletionClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(model: &str, turns: &[Turn]) -> serde_json::Value {
        serde_json::json!({
            "model": model,
            "messages": turns,
        })
    }

    /// Extract the assistant reply from a success response.
    /// A missing content field reads as the empty string.
    pub(crate) fn parse_reply(json: &serde_json::Value) -> String {
        json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl CompletionTransport for CompletionClient {
    async fn complete(&self, model: &str, turns: &[Turn]) -> Result<String, ChatError> {
        let body = Self::build_request_body(model, turns);

        debug!(model = %model, turns = turns.len(), "completion request");

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        Ok(Self::parse_reply(&json))
    }
}
