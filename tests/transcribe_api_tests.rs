//! End-to-End tests for the one-shot transcription endpoint
//!
//! Exercises POST /api/transcribe against a mocked speech-to-text backend.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use solace_relay::{ServerConfig, routes, state::AppState};

fn create_test_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        openai_api_key: "test_openai_key".to_string(),
        openai_base_url: base_url.to_string(),
        cors_allowed_origins: None,
        stream_concat_chunks: false,
    }
}

fn create_test_app(base_url: &str) -> axum::Router {
    let state = AppState::new(create_test_config(base_url)).expect("failed to build app state");
    routes::api::create_api_router().with_state(state)
}

async fn post_json(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/transcribe")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn mock_transcription(text: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/v1/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": text })))
}

/// Byte-level needle search, for inspecting multipart upload bodies.
fn body_contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[tokio::test]
async fn transcribe_rejects_missing_audio_data_without_upstream_calls() {
    let mock_server = MockServer::start().await;
    mock_transcription("unused")
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(app, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No audio data provided");
}

#[tokio::test]
async fn transcribe_rejects_empty_audio_data() {
    let mock_server = MockServer::start().await;
    mock_transcription("unused")
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(app, json!({"audioData": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No audio data provided");
}

#[tokio::test]
async fn transcribe_forwards_decoded_audio_and_returns_transcript() {
    let mock_server = MockServer::start().await;
    mock_transcription("hello from the other side")
        .expect(1)
        .mount(&mock_server)
        .await;

    let audio_bytes = b"fake-mp3-recording";
    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        json!({"audioData": base64::engine::general_purpose::STANDARD.encode(audio_bytes)}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "hello from the other side");

    // The multipart upload must carry the decoded bytes plus the fixed
    // model and language fields.
    let requests = mock_server.received_requests().await.expect("requests");
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/v1/audio/transcriptions")
        .expect("transcription request sent");
    assert!(body_contains(&upload.body, audio_bytes));
    assert!(body_contains(&upload.body, b"whisper-1"));
    assert!(body_contains(&upload.body, b"\"language\""));
}

#[tokio::test]
async fn transcribe_provider_failure_is_generic_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "whisper fell over", "type": "server_error"}
        })))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        json!({"audioData": base64::engine::general_purpose::STANDARD.encode(b"audio")}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing audio");
    assert!(!body.to_string().contains("whisper fell over"));
}

#[tokio::test]
async fn transcribe_invalid_base64_is_500_without_upstream_calls() {
    let mock_server = MockServer::start().await;
    mock_transcription("unused")
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(app, json!({"audioData": "!!!not-base64!!!"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing audio");
}
