use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{ApiError, Endpoint};
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};
use crate::tts::{TTSRequest, TTSResponse};

/// Decode a JSON request body. Malformed JSON, a missing field or a
/// non-string value all yield `None`.
fn parse_request<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    serde_json::from_slice(body).ok()
}

/// Only the empty string is rejected; whitespace is forwarded as-is.
fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "llm_configured": state.translator.is_configured(),
        "tts_configured": state.tts.is_configured(),
    }))
}

/// `POST /api/translate` with `{ "input": string }`
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslateResponse>, ApiError> {
    let input = parse_request::<TranslateRequest>(&body)
        .and_then(|request| non_empty(request.input))
        .ok_or_else(|| ApiError::invalid_input(Endpoint::Translate))?;

    let request_id = Uuid::new_v4();
    info!(%request_id, chars = input.chars().count(), "Translating input");

    let output = state.translator.translate(&input).await.map_err(|e| {
        error!(%request_id, "Translation error: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(TranslateResponse { output }))
}

/// `POST /api/text-to-speech` with `{ "text": string }`
pub async fn text_to_speech(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TTSResponse>, ApiError> {
    let text = parse_request::<TTSRequest>(&body)
        .and_then(|request| non_empty(request.text))
        .ok_or_else(|| ApiError::invalid_input(Endpoint::Speech))?;

    let request_id = Uuid::new_v4();
    info!(%request_id, chars = text.chars().count(), "Generating speech");

    let response = state.tts.generate_audio(&text).await.map_err(|e| {
        error!(%request_id, "Text-to-speech error: {}", e);
        ApiError::from(e)
    })?;

    info!(%request_id, duration = response.duration, "Speech ready");
    Ok(Json(response))
}
