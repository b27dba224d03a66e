use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TTS request for synthesizing text to speech
#[derive(Debug, Clone, Deserialize)]
pub struct TTSRequest {
    pub text: String,
}

/// TTS response pointing at the hosted audio
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TTSResponse {
    pub audio_url: String,
    /// Duration in milliseconds as reported by the provider
    pub duration: f64,
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech API key is not configured")]
    MissingApiKey,

    #[error("speech request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech queue {stage} returned {status}: {body}")]
    Status {
        stage: &'static str,
        status: u16,
        body: String,
    },

    #[error("speech job {request_id} failed")]
    JobFailed { request_id: String },

    #[error("speech job {request_id} did not complete after {attempts} polls")]
    Timeout { request_id: String, attempts: u32 },

    #[error("speech result carried an invalid audio url: {0}")]
    InvalidAudioUrl(String),
}

/// TTS interface trait - synthesis is delegated to a hosted provider
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize `text` and return the hosted audio location.
    ///
    /// Either a complete result is returned or an error; never a partial one.
    async fn generate_audio(&self, text: &str) -> Result<TTSResponse, SpeechError>;

    /// Whether a credential is available for the provider.
    fn is_configured(&self) -> bool;
}
