//! Streaming WebSocket route configuration
//!
//! # Endpoint
//!
//! `GET /` - WebSocket upgrade for the voice-capture session. The original
//! backend attached the WebSocket server to the shared HTTP listener with no
//! distinct path, so the upgrade lives at the root.
//!
//! # Protocol
//!
//! After the upgrade, clients send:
//! - `START_STREAM` to open a capture (acknowledged with a status envelope)
//! - base64-encoded audio chunks
//! - `END_STREAM` to close the capture and request transcription
//!
//! Server responses are JSON envelopes:
//!
//! ```json
//! {"type": "status", "status": "started"}
//! {"type": "transcription", "text": "..."}
//! {"type": "error", "error": "...", "details": "..."}
//! ```

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::stream::stream_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the streaming WebSocket router
pub fn create_stream_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(stream_handler))
        .layer(TraceLayer::new_for_http())
}
