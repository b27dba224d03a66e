use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible chat-completion provider
/// used for jargon translation (OpenRouter by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "max_tokens")]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sent as `HTTP-Referer` for provider attribution
    #[serde(rename = "site_url")]
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Sent as `X-Title`
    #[serde(rename = "app_title")]
    #[serde(default = "default_app_title")]
    pub app_title: String,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "google/gemini-2.5-flash".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_site_url() -> String {
    "https://example.com".to_string()
}

fn default_app_title() -> String {
    "Internet Buzzword Translator".to_string()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            llm_api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            site_url: default_site_url(),
            app_title: default_app_title(),
        }
    }
}
