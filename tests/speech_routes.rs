//! Integration tests for `POST /api/text-to-speech`.

mod common;

use axum::http::StatusCode;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use buzzword_backend::config::Config;
use common::{app, assert_no_upstream_calls, config_for, post_json, TTS_KEY};

const TEXT: &str = "通过社交媒体矩阵进行品牌曝光";
const SUBMIT_PATH: &str = "/fal-ai/minimax/speech-02-turbo";
const STATUS_PATH: &str = "/fal-ai/minimax/requests/job-42/status";
const RESULT_PATH: &str = "/fal-ai/minimax/requests/job-42";

async fn mount_submit(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(header("authorization", format!("Key {TTS_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "request_id": "job-42",
            "status": "IN_QUEUE"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(status_reply(status))
        .mount(server)
        .await;
}

fn speech_body() -> String {
    serde_json::json!({ "text": TEXT }).to_string()
}

async fn post_speech(config: Config, body: &str) -> (StatusCode, serde_json::Value) {
    post_json(app(config), "/api/text-to-speech", body).await
}

fn status_reply(status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": status }))
}

#[tokio::test]
async fn completed_job_returns_url_and_duration() {
    let server = MockServer::start().await;
    mount_submit(&server).await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(status_reply("IN_PROGRESS"))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    mount_status(&server, "COMPLETED").await;
    Mock::given(method("GET"))
        .and(path(RESULT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audio": {"url": "https://v3.fal.media/files/job-42.mp3", "content_type": "audio/mpeg"},
            "duration_ms": 5230
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = post_speech(config_for(&server, true), &speech_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["audioUrl"], "https://v3.fal.media/files/job-42.mp3");
    assert_eq!(json["duration"].as_f64(), Some(5230.0));
}

#[tokio::test]
async fn failed_job_returns_500_without_audio() {
    let server = MockServer::start().await;
    mount_submit(&server).await;
    mount_status(&server, "FAILED").await;

    let (status, json) = post_speech(config_for(&server, true), &speech_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "语音生成失败，请稍后重试" }));
}

#[tokio::test]
async fn never_completing_job_times_out() {
    let server = MockServer::start().await;
    mount_submit(&server).await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(status_reply("IN_QUEUE"))
        .expect(4)
        .mount(&server)
        .await;

    let mut config = config_for(&server, true);
    config.tts_config.max_poll_attempts = 4;
    let (status, json) = post_speech(config, &speech_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("audioUrl").is_none());
    assert_eq!(json["error"], "语音生成失败，请稍后重试");
}

#[tokio::test]
async fn result_fetch_failure_returns_500_without_audio() {
    let server = MockServer::start().await;
    mount_submit(&server).await;
    mount_status(&server, "COMPLETED").await;
    Mock::given(method("GET"))
        .and(path(RESULT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("result store unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = post_speech(config_for(&server, true), &speech_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("audioUrl").is_none());
    assert_eq!(json, serde_json::json!({ "error": "语音生成失败，请稍后重试" }));
}

#[tokio::test]
async fn rejected_submit_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let (status, json) = post_speech(config_for(&server, true), &speech_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "语音生成失败，请稍后重试");
}

#[tokio::test]
async fn rejects_empty_and_non_string_text() {
    let server = MockServer::start().await;

    for body in [r#"{"text": ""}"#, r#"{"text": false}"#, r#"{"input": "hi"}"#, "[]"] {
        let (status, json) = post_speech(config_for(&server, true), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json["error"], "文本内容不能为空");
    }

    assert_no_upstream_calls(&server).await;
}

#[tokio::test]
async fn whitespace_text_is_submitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(body_partial_json(serde_json::json!({ "text": "  " })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "request_id": "job-42"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_status(&server, "FAILED").await;

    let (status, _) = post_speech(config_for(&server, true), r#"{"text": "  "}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_credential_fails_before_network() {
    let server = MockServer::start().await;

    let (status, json) = post_speech(config_for(&server, false), &speech_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "请在环境变量中配置 FAL_KEY");
    assert_no_upstream_calls(&server).await;
}
