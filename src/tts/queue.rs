//! Client for the fal.ai queue API: submit a job, poll its status, fetch
//! the result.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::interface::SpeechError;
use crate::config_manager::tts::{TTSConfig, VoiceSetting};

#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    text: &'a str,
    voice_setting: &'a VoiceSetting,
    output_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    request_id: String,
    #[serde(default)]
    status_url: Option<String>,
    #[serde(default)]
    response_url: Option<String>,
}

/// Handle for a submitted job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedJob {
    pub request_id: String,
    pub status_url: String,
    pub response_url: String,
}

/// Job states reported by the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    InQueue,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub struct AudioFile {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechOutput {
    pub audio: AudioFile,
    pub duration_ms: f64,
}

#[derive(Debug, Clone)]
pub struct FalQueueClient {
    client: Client,
    queue_url: String,
    model_id: String,
    app_path: String,
    api_key: Option<String>,
    voice_setting: VoiceSetting,
}

impl FalQueueClient {
    pub fn new(client: Client, config: &TTSConfig) -> Self {
        Self {
            client,
            queue_url: config.queue_url.trim_end_matches('/').to_string(),
            model_id: config.model_id.trim_matches('/').to_string(),
            app_path: config.app_path(),
            api_key: config.api_key.clone(),
            voice_setting: config.voice_setting.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn auth_header(&self) -> Result<String, SpeechError> {
        self.api_key
            .as_deref()
            .map(|key| format!("Key {key}"))
            .ok_or(SpeechError::MissingApiKey)
    }

    fn requests_url(&self, request_id: &str) -> String {
        format!("{}/{}/requests/{}", self.queue_url, self.app_path, request_id)
    }

    /// Submit a synthesis job with the configured voice.
    pub async fn submit(&self, text: &str) -> Result<QueuedJob, SpeechError> {
        let auth = self.auth_header()?;
        let payload = SubmitPayload {
            text,
            voice_setting: &self.voice_setting,
            output_format: "url",
        };

        let response = self
            .client
            .post(format!("{}/{}", self.queue_url, self.model_id))
            .header("Authorization", auth)
            .json(&payload)
            .send()
            .await?;
        let submitted: SubmitResponse = ensure_success("submit", response).await?.json().await?;

        let base = self.requests_url(&submitted.request_id);
        debug!("Submitted speech job {}", submitted.request_id);
        Ok(QueuedJob {
            status_url: submitted
                .status_url
                .unwrap_or_else(|| format!("{base}/status")),
            response_url: submitted.response_url.unwrap_or(base),
            request_id: submitted.request_id,
        })
    }

    pub async fn status(&self, job: &QueuedJob) -> Result<JobStatus, SpeechError> {
        let response = self
            .client
            .get(&job.status_url)
            .header("Authorization", self.auth_header()?)
            .send()
            .await?;
        let status: StatusResponse = ensure_success("status", response).await?.json().await?;
        Ok(status.status)
    }

    pub async fn result(&self, job: &QueuedJob) -> Result<SpeechOutput, SpeechError> {
        let response = self
            .client
            .get(&job.response_url)
            .header("Authorization", self.auth_header()?)
            .send()
            .await?;
        Ok(ensure_success("result", response).await?.json().await?)
    }
}

async fn ensure_success(stage: &'static str, response: Response) -> Result<Response, SpeechError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Speech queue {} failed with {}: {}", stage, status, body);
    Err(SpeechError::Status {
        stage,
        status: status.as_u16(),
        body,
    })
}
