//! HTTP and WebSocket request handlers.

pub mod chat;
pub mod stream;
pub mod transcribe;

use axum::response::Json;
use serde_json::{Value, json};

/// Handler for GET /api/health - liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
