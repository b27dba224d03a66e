use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::config_manager::stateless_llm::LLMConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::tts::TTSConfig;
use crate::config_manager::utils::{
    is_json_path, load_text_file_with_guess_encoding, normalize_secret, substitute_env_vars,
};

/// Environment variable holding the chat-completion credential
pub const LLM_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable holding the speech queue credential
pub const TTS_API_KEY_ENV: &str = "FAL_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LLMConfig,
    #[serde(default)]
    pub tts_config: TTSConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::NotFound(path.to_string()));
        }

        let content = load_text_file_with_guess_encoding(Path::new(path))?;
        Self::parse(&content, is_json_path(path))
    }

    /// Parse a config document after `${VAR}` substitution.
    /// JSON-LD `@context` keys are ignored.
    pub fn parse(content: &str, json: bool) -> Result<Self, ConfigError> {
        let content = substitute_env_vars(content)?;
        let mut config: Config = if json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.normalize_credentials();
        Ok(config)
    }

    /// Fill credentials the config left unset from the conventional
    /// environment variables.
    pub fn fill_credentials_from_env(&mut self) {
        if self.llm_config.llm_api_key.is_none() {
            self.llm_config.llm_api_key = normalize_secret(std::env::var(LLM_API_KEY_ENV).ok());
        }
        if self.tts_config.api_key.is_none() {
            self.tts_config.api_key = normalize_secret(std::env::var(TTS_API_KEY_ENV).ok());
        }
    }

    fn normalize_credentials(&mut self) {
        self.llm_config.llm_api_key = normalize_secret(self.llm_config.llm_api_key.take());
        self.tts_config.api_key = normalize_secret(self.tts_config.api_key.take());
    }
}
