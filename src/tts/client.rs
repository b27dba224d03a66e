use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::interface::{SpeechError, TTSInterface, TTSResponse};
use super::queue::{FalQueueClient, JobStatus};
use crate::config_manager::tts::TTSConfig;

/// TTS client that drives a queued synthesis job to completion
pub struct TTSClient {
    queue: FalQueueClient,
    poll_interval: Duration,
    max_attempts: u32,
}

impl TTSClient {
    pub fn new(client: Client, config: &TTSConfig) -> Self {
        info!(
            "Initialized TTSClient: model={}, voice={}, poll every {}ms up to {} times",
            config.model_id,
            config.voice_setting.voice_id,
            config.poll_interval_ms,
            config.max_poll_attempts
        );
        Self {
            queue: FalQueueClient::new(client, config),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_attempts: config.max_poll_attempts,
        }
    }

    /// Submit, then wait one interval before each status check. A job
    /// still pending after the last check is a timeout.
    pub async fn synthesize(&self, text: &str) -> Result<TTSResponse, SpeechError> {
        let job = self.queue.submit(text).await?;

        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.poll_interval).await;

            match self.queue.status(&job).await? {
                JobStatus::Completed => {
                    let output = self.queue.result(&job).await?;
                    if Url::parse(&output.audio.url).is_err() {
                        return Err(SpeechError::InvalidAudioUrl(output.audio.url));
                    }
                    debug!("Speech job {} completed after {} polls", job.request_id, attempt);
                    return Ok(TTSResponse {
                        audio_url: output.audio.url,
                        duration: output.duration_ms,
                    });
                }
                JobStatus::Failed => {
                    return Err(SpeechError::JobFailed {
                        request_id: job.request_id,
                    });
                }
                status => {
                    debug!(
                        "Speech job {} is {:?} (poll {}/{})",
                        job.request_id, status, attempt, self.max_attempts
                    );
                }
            }
        }

        warn!("Speech job {} timed out", job.request_id);
        Err(SpeechError::Timeout {
            request_id: job.request_id,
            attempts: self.max_attempts,
        })
    }
}

#[async_trait]
impl TTSInterface for TTSClient {
    async fn generate_audio(&self, text: &str) -> Result<TTSResponse, SpeechError> {
        self.synthesize(text).await
    }

    fn is_configured(&self) -> bool {
        self.queue.is_configured()
    }
}
