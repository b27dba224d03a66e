use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::prompt::build_messages;
use crate::llm::{LlmError, StatelessLLMInterface};

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("input text is empty")]
    EmptyInput,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Rewrites plain statements into jargon through a chat-completion model.
#[derive(Clone)]
pub struct JargonTranslator {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl JargonTranslator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_configured()
    }

    /// Translate `input` and return the trimmed model reply.
    pub async fn translate(&self, input: &str) -> Result<String, TranslateError> {
        if input.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let reply = self.llm.chat_completion(build_messages(input)).await?;
        let output = reply.trim();
        if output.is_empty() {
            return Err(LlmError::EmptyCompletion.into());
        }

        debug!("Translated {} chars into {} chars", input.chars().count(), output.chars().count());
        Ok(output.to_string())
    }
}
