//! HTTP-facing error type.
//!
//! Every failure collapses to a `{ "error": "<message>" }` body with a
//! fixed, localized message. Causes are logged by the handlers and never
//! returned to callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::{LLM_API_KEY_ENV, TTS_API_KEY_ENV};
use crate::llm::LlmError;
use crate::translate::TranslateError;
use crate::tts::SpeechError;

/// The two proxied operations, each with its own user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Translate,
    Speech,
}

impl Endpoint {
    fn invalid_input_message(self) -> &'static str {
        match self {
            Endpoint::Translate => "输入内容不能为空",
            Endpoint::Speech => "文本内容不能为空",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Translate => "转换失败，请稍后重试",
            Endpoint::Speech => "语音生成失败，请稍后重试",
        }
    }

    fn credential_env(self) -> &'static str {
        match self {
            Endpoint::Translate => LLM_API_KEY_ENV,
            Endpoint::Speech => TTS_API_KEY_ENV,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Empty, missing or non-string input.
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    /// A deployment fault such as a missing credential.
    #[error("Configuration: {0}")]
    Configuration(String),

    /// Network, vendor or timeout failure.
    #[error("Upstream failure: {0}")]
    Upstream(&'static str),
}

impl ApiError {
    pub fn invalid_input(endpoint: Endpoint) -> Self {
        ApiError::BadRequest(endpoint.invalid_input_message())
    }

    pub fn missing_credential(endpoint: Endpoint) -> Self {
        ApiError::Configuration(format!("请在环境变量中配置 {}", endpoint.credential_env()))
    }

    pub fn upstream(endpoint: Endpoint) -> Self {
        ApiError::Upstream(endpoint.failure_message())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(msg) | ApiError::Upstream(msg) => msg.to_string(),
            ApiError::Configuration(msg) => msg,
        };
        (status, axum::Json(ErrorBody { error })).into_response()
    }
}

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::EmptyInput => ApiError::invalid_input(Endpoint::Translate),
            TranslateError::Llm(LlmError::MissingApiKey) => {
                ApiError::missing_credential(Endpoint::Translate)
            }
            TranslateError::Llm(_) => ApiError::upstream(Endpoint::Translate),
        }
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::MissingApiKey => ApiError::missing_credential(Endpoint::Speech),
            _ => ApiError::upstream(Endpoint::Speech),
        }
    }
}
