//! End-to-End tests for the chat endpoint
//!
//! Exercises POST /api/chat against mocked completion and speech synthesis
//! backends, verifying prompt assembly, mode validation, and failure
//! isolation without touching the real provider.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use solace_relay::{ServerConfig, routes, state::AppState};

/// Helper function to create a minimal test configuration
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

/// Build the API router wired to a mock provider backend
fn create_test_app(base_url: &str) -> axum::Router {
    let state = AppState::new(create_test_config(base_url)).expect("failed to build app state");
    routes::api::create_api_router().with_state(state)
}

/// Send a JSON POST through the router and collect the response
async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
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

fn mock_completion(reply: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test_openai_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": reply}}]
        })))
}

fn mock_speech(audio: &[u8]) -> Mock {
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(header("Authorization", "Bearer test_openai_key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(audio.to_vec()),
        )
}

#[tokio::test]
async fn chat_returns_text_and_audio_for_every_mode() {
    let mock_server = MockServer::start().await;
    mock_completion("You are heard.").mount(&mock_server).await;
    mock_speech(b"fake-mp3-audio").mount(&mock_server).await;

    for mode in ["therapy", "relationship", "career", "life"] {
        let app = create_test_app(&mock_server.uri());
        let (status, body) = post_json(
            app,
            "/api/chat",
            json!({"message": "I need some advice", "sessionType": mode, "isFirstMessage": false}),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "mode {mode} should succeed");
        assert_eq!(body["response"], "You are heard.");
        assert_eq!(
            body["audioContent"],
            base64::engine::general_purpose::STANDARD.encode(b"fake-mp3-audio")
        );
    }
}

#[tokio::test]
async fn chat_rejects_unknown_session_type_without_upstream_calls() {
    let mock_server = MockServer::start().await;
    mock_completion("unused").expect(0).mount(&mock_server).await;
    mock_speech(b"unused").expect(0).mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        "/api/chat",
        json!({"message": "hello", "sessionType": "quickCalming", "isFirstMessage": true}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid session type");
}

#[tokio::test]
async fn chat_rejects_empty_message() {
    let mock_server = MockServer::start().await;
    mock_completion("unused").expect(0).mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        "/api/chat",
        json!({"message": "   ", "sessionType": "therapy", "isFirstMessage": false}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn chat_first_message_carries_disclaimer_before_user_turn() {
    let mock_server = MockServer::start().await;
    mock_completion("Welcome.").mount(&mock_server).await;
    mock_speech(b"audio").mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    let (status, _) = post_json(
        app,
        "/api/chat",
        json!({"message": "first hello", "sessionType": "therapy", "isFirstMessage": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    let completion_request = requests
        .iter()
        .find(|r| r.url.path() == "/v1/chat/completions")
        .expect("completion request sent");

    let body: Value = serde_json::from_slice(&completion_request.body).expect("JSON body");
    let messages = body["messages"].as_array().expect("messages array");

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "assistant");
    assert!(
        messages[1]["content"]
            .as_str()
            .expect("disclaimer content")
            .contains("not a substitute for professional medical advice")
    );
    assert_eq!(messages[2]["role"], "user");
    assert_eq!(messages[2]["content"], "first hello");
}

#[tokio::test]
async fn chat_follow_up_message_has_no_disclaimer_turn() {
    let mock_server = MockServer::start().await;
    mock_completion("Go on.").mount(&mock_server).await;
    mock_speech(b"audio").mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    let (status, _) = post_json(
        app,
        "/api/chat",
        json!({"message": "still here", "sessionType": "life", "isFirstMessage": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = mock_server.received_requests().await.expect("requests");
    let completion_request = requests
        .iter()
        .find(|r| r.url.path() == "/v1/chat/completions")
        .expect("completion request sent");

    let body: Value = serde_json::from_slice(&completion_request.body).expect("JSON body");
    let messages = body["messages"].as_array().expect("messages array");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
}

#[tokio::test]
async fn chat_uses_fixed_completion_parameters() {
    let mock_server = MockServer::start().await;
    mock_completion("ok").mount(&mock_server).await;
    mock_speech(b"audio").mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    post_json(
        app,
        "/api/chat",
        json!({"message": "hi", "sessionType": "career", "isFirstMessage": false}),
    )
    .await;

    let requests = mock_server.received_requests().await.expect("requests");
    let completion_request = requests
        .iter()
        .find(|r| r.url.path() == "/v1/chat/completions")
        .expect("completion request sent");

    let body: Value = serde_json::from_slice(&completion_request.body).expect("JSON body");
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["max_tokens"], 500);
    let temperature = body["temperature"].as_f64().expect("temperature");
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn chat_speech_failure_yields_generic_500_without_partial_text() {
    let mock_server = MockServer::start().await;
    mock_completion("A secret partial reply").mount(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "synthesis exploded", "type": "server_error"}
        })))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        "/api/chat",
        json!({"message": "hello", "sessionType": "therapy", "isFirstMessage": false}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An error occurred while processing your request"
    );
    assert!(!body.to_string().contains("A secret partial reply"));
    assert!(!body.to_string().contains("synthesis exploded"));
}

#[tokio::test]
async fn chat_completion_failure_skips_speech_synthesis() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;
    mock_speech(b"unused").expect(0).mount(&mock_server).await;

    let app = create_test_app(&mock_server.uri());
    let (status, body) = post_json(
        app,
        "/api/chat",
        json!({"message": "hello", "sessionType": "therapy", "isFirstMessage": false}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An error occurred while processing your request"
    );
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
    assert_eq!(body["status"], "healthy");
}
