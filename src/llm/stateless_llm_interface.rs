use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("chat completion API key is not configured")]
    MissingApiKey,

    #[error("chat completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat completion provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat completion provider returned no text")]
    EmptyCompletion,
}

/// A single chat message in OpenAI wire format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one non-streaming chat completion and return the reply text.
    ///
    /// Implementations must fail with [`LlmError::MissingApiKey`] before
    /// touching the network when no credential is configured.
    async fn chat_completion(&self, messages: Vec<Message>) -> Result<String, LlmError>;

    /// Whether a credential is available for this provider.
    fn is_configured(&self) -> bool;
}
