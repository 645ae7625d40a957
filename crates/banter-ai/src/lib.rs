//! Conversation engine for banter.
//!
//! Provides the chat completion client and conversation session:
//! - Ordered turn history (system / user / assistant)
//! - One blocking request/response exchange per user turn
//! - Credential configuration from the process environment

pub mod client;
pub mod config;
pub mod session;

use async_trait::async_trait;

pub use client::CompletionClient;
pub use config::ChatConfig;
pub use session::Session;

/// A completion backend. One call sends the full ordered turn sequence
/// and returns the assistant's reply text.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn complete(&self, model: &str, turns: &[Turn]) -> Result<String, ChatError>;
}

/// One message entry in a conversation, tagged with a role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API_KEY not set in environment")]
    MissingApiKey,
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("model returned an empty reply")]
    EmptyReply,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}
