//! Handler for `POST /api/transcribe`.
//!
//! One-shot speech-to-text: the client posts base64 audio in the request
//! body and receives the transcript. The streaming session in
//! `handlers::stream` covers the interactive capture path.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::{AudioInputFormat, ProviderError};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Generic client-facing message for any downstream failure on this route.
pub const TRANSCRIBE_UPSTREAM_ERROR: &str = "Error processing audio";

/// Request body carrying base64-encoded audio.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    #[serde(default)]
    pub audio_data: Option<String>,
}

/// Response body carrying the transcript.
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Handler for POST /api/transcribe
pub async fn transcribe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranscribeRequest>,
) -> AppResult<Json<TranscribeResponse>> {
    let audio_data = request
        .audio_data
        .filter(|data| !data.is_empty())
        .ok_or(AppError::MissingInput("No audio data provided"))?;

    let audio = base64::engine::general_purpose::STANDARD
        .decode(audio_data)
        .map_err(|e| {
            AppError::upstream(
                TRANSCRIBE_UPSTREAM_ERROR,
                ProviderError::Decode(format!("request body is not valid base64: {e}")),
            )
        })?;

    let text = state
        .transcription
        .transcribe(audio, AudioInputFormat::Mp3)
        .await
        .map_err(|e| AppError::upstream(TRANSCRIBE_UPSTREAM_ERROR, e))?;

    Ok(Json(TranscribeResponse { text }))
}
