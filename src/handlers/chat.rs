//! Handler for `POST /api/chat`.
//!
//! One user turn in, one assistant turn out: the message is completed by the
//! language model, the reply is synthesized to speech, and both travel back
//! in a single response. Downstream calls run sequentially and nothing is
//! returned until both have finished - a synthesis failure discards the text
//! reply rather than returning a partial result.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConversationMode, build_messages};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Generic client-facing message for any downstream failure on this route.
pub const CHAT_UPSTREAM_ERROR: &str = "An error occurred while processing your request";

/// Request body for a chat turn.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message.
    #[serde(default)]
    pub message: String,
    /// Conversation mode tag; validated against the fixed enumeration.
    #[serde(default)]
    pub session_type: String,
    /// True on the opening message of a session, which prepends the
    /// disclaimer turn to the prompt.
    #[serde(default)]
    pub is_first_message: bool,
}

/// Response body: the assistant's text plus its spoken rendition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Assistant reply text.
    pub response: String,
    /// Base64-encoded audio rendition of the reply.
    pub audio_content: String,
}

/// Handler for POST /api/chat
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let mode = ConversationMode::parse(&request.session_type).ok_or(AppError::InvalidMode)?;

    if request.message.trim().is_empty() {
        return Err(AppError::MissingInput("Message is required"));
    }

    debug!(mode = %mode, is_first = request.is_first_message, "processing chat turn");

    let messages = build_messages(mode, &request.message, request.is_first_message);

    let text = state
        .completion
        .complete(&messages)
        .await
        .map_err(|e| AppError::upstream(CHAT_UPSTREAM_ERROR, e))?;

    let audio = state
        .speech
        .synthesize(&text)
        .await
        .map_err(|e| AppError::upstream(CHAT_UPSTREAM_ERROR, e))?;

    let audio_content = base64::engine::general_purpose::STANDARD.encode(audio);

    Ok(Json(ChatResponse {
        response: text,
        audio_content,
    }))
}
