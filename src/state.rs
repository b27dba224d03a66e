use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::llm::OpenAICompatibleLLM;
use crate::translate::JargonTranslator;
use crate::tts::{TTSClient, TTSInterface};

/// Shared, read-only handles for request handlers. Nothing here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: JargonTranslator,
    pub tts: Arc<dyn TTSInterface>,
}

impl AppState {
    /// Build the upstream clients from config, sharing one HTTP client.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        let llm = Arc::new(OpenAICompatibleLLM::new(client.clone(), &config.llm_config));
        let tts = Arc::new(TTSClient::new(client, &config.tts_config));

        Ok(Self::with_services(config, JargonTranslator::new(llm), tts))
    }

    pub fn with_services(
        config: Config,
        translator: JargonTranslator,
        tts: Arc<dyn TTSInterface>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator,
            tts,
        }
    }
}
