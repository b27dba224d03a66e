use serde::{Deserialize, Serialize};

/// Voice parameters sent with every synthesis job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSetting {
    #[serde(default = "default_speed")]
    pub speed: f64,

    #[serde(default = "default_vol")]
    pub vol: f64,

    #[serde(rename = "voice_id")]
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    #[serde(default)]
    pub pitch: i32,

    #[serde(rename = "english_normalization")]
    #[serde(default)]
    pub english_normalization: bool,
}

fn default_speed() -> f64 {
    1.2
}

fn default_vol() -> f64 {
    1.0
}

fn default_voice_id() -> String {
    "Wise_Woman".to_string()
}

impl Default for VoiceSetting {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            vol: default_vol(),
            voice_id: default_voice_id(),
            pitch: 0,
            english_normalization: false,
        }
    }
}

/// Configuration for the queued text-to-speech provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    #[serde(rename = "queue_url")]
    #[serde(default = "default_queue_url")]
    pub queue_url: String,

    /// Full model path, e.g. `fal-ai/minimax/speech-02-turbo`
    #[serde(rename = "model_id")]
    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(rename = "poll_interval_ms")]
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(rename = "max_poll_attempts")]
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    #[serde(rename = "voice_setting")]
    #[serde(default)]
    pub voice_setting: VoiceSetting,
}

fn default_queue_url() -> String {
    "https://queue.fal.run".to_string()
}

fn default_model_id() -> String {
    "fal-ai/minimax/speech-02-turbo".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_max_poll_attempts() -> u32 {
    30
}

impl TTSConfig {
    /// The `owner/app` prefix under which the queue exposes request
    /// status and results. Sub-paths of the model id are not part of it.
    pub fn app_path(&self) -> String {
        let segments: Vec<&str> = self
            .model_id
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        segments
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            queue_url: default_queue_url(),
            model_id: default_model_id(),
            api_key: None,
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            voice_setting: VoiceSetting::default(),
        }
    }
}
