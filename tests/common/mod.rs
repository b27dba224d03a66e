//! Shared helpers for router integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::MockServer;

use buzzword_backend::config::Config;
use buzzword_backend::routes::create_app;
use buzzword_backend::state::AppState;

pub const LLM_KEY: &str = "sk-or-test";
pub const TTS_KEY: &str = "fal-test";

/// Config whose upstreams both point at `server`, with a fast poll loop.
pub fn config_for(server: &MockServer, with_keys: bool) -> Config {
    let mut config = Config::default();
    config.system_config.static_dir = "/nonexistent/buzzword-static".to_string();
    config.llm_config.base_url = format!("{}/api/v1", server.uri());
    config.tts_config.queue_url = server.uri();
    config.tts_config.poll_interval_ms = 1;
    if with_keys {
        config.llm_config.llm_api_key = Some(LLM_KEY.to_string());
        config.tts_config.api_key = Some(TTS_KEY.to_string());
    }
    config
}

pub fn app(config: Config) -> Router {
    create_app(AppState::new(config).expect("http client"))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"));
    (status, json)
}

pub async fn assert_no_upstream_calls(server: &MockServer) {
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(
        requests.is_empty(),
        "expected no upstream calls, got {}",
        requests.len()
    );
}
