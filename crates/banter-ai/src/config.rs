//! Credential configuration for the completion API.

use std::fmt;

use crate::ChatError;

/// Default model served through the DeepInfra OpenAI-compatible endpoint.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";

/// Default system instruction seeded as the first turn of a session.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Completion API configuration. Resolved once at startup and handed to
/// the client, never read from the environment after that.
#[derive(Clone)]
pub struct ChatConfig {
    pub api_key: String,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Create config from the `API_KEY` environment variable.
    /// Absence is fatal at startup.
    pub fn from_env() -> Result<Self, ChatError> {
        match std::env::var("API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(ChatError::MissingApiKey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = ChatConfig::new("sk-secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret-key"));
    }
}
