use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, chat, transcribe};
use crate::state::AppState;
use std::sync::Arc;

/// Create the HTTP API router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/transcribe", post(transcribe::transcribe_handler))
        .route("/api/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
}
