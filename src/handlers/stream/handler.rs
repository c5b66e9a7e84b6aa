//! Streaming transcription WebSocket handler.
//!
//! Drives the voice-capture protocol over a persistent connection: the
//! client opens a capture with `START_STREAM`, sends base64 audio chunks,
//! and closes it with `END_STREAM`, at which point the captured audio is
//! written to a temporary file, transcribed, and the transcript (or an
//! in-band error) is sent back on the same connection. All session state is
//! owned by this connection's tasks and dropped with them.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use base64::Engine;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::messages::{END_STREAM, MessageRoute, OutgoingMessage, START_STREAM};
use super::session::StreamSession;
use crate::core::AudioInputFormat;
use crate::state::AppState;

/// Channel buffer size for outgoing messages.
const CHANNEL_BUFFER_SIZE: usize = 64;

/// Maximum WebSocket message size (10 MB). A single voice-note chunk from
/// the mobile recorder stays far below this.
const MAX_WS_MESSAGE_SIZE: usize = 10 * 1024 * 1024;

/// Prefix of the temporary files holding captured audio.
pub const TEMP_FILE_PREFIX: &str = "solace-audio-";

/// Client-facing message when transcription of a capture fails.
const TRANSCRIBE_ERROR: &str = "Failed to transcribe audio";

/// Client-facing message when a capture ends with nothing buffered.
const NO_AUDIO_ERROR: &str = "No audio data received";

/// Streaming WebSocket handler
///
/// Upgrades the HTTP connection and hands the socket to the session loop.
pub async fn stream_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    info!("WebSocket connection upgrade requested");

    ws.max_message_size(MAX_WS_MESSAGE_SIZE)
        .on_upgrade(move |socket| handle_stream_socket(socket, state))
}

/// Run one connection's capture session until the client disconnects.
async fn handle_stream_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket connection established");

    let (mut sender, mut receiver) = socket.split();
    let (message_tx, mut message_rx) = mpsc::channel::<MessageRoute>(CHANNEL_BUFFER_SIZE);

    // Sender task for outgoing messages
    let sender_task = tokio::spawn(async move {
        while let Some(route) = message_rx.recv().await {
            let should_close = matches!(route, MessageRoute::Close);

            let result = match route {
                MessageRoute::Outgoing(message) => match serde_json::to_string(&message) {
                    Ok(json_str) => sender.send(Message::Text(json_str.into())).await,
                    Err(e) => {
                        error!("Failed to serialize outgoing message: {}", e);
                        continue;
                    }
                },
                MessageRoute::Close => sender.send(Message::Close(None)).await,
            };

            if let Err(e) = result {
                error!("Failed to send WebSocket message: {}", e);
                break;
            }

            if should_close {
                break;
            }
        }
    });

    // Capture state for this connection; owned by this loop alone.
    let mut session = StreamSession::new();

    while let Some(msg_result) = receiver.next().await {
        match msg_result {
            Ok(msg) => {
                let continue_processing =
                    process_stream_message(msg, &mut session, &message_tx, &state).await;

                if !continue_processing {
                    break;
                }
            }
            Err(e) => {
                warn!("WebSocket error: {}", e);
                break;
            }
        }
    }

    // Session state (and any unfinished capture) is discarded with the
    // connection; only the end-of-stream path cleans up temporary files.
    sender_task.abort();
    info!("WebSocket connection closed");
}

/// Process one inbound frame.
///
/// # Returns
/// * `bool` - true to continue processing, false to terminate the connection
async fn process_stream_message(
    msg: Message,
    session: &mut StreamSession,
    message_tx: &mpsc::Sender<MessageRoute>,
    state: &Arc<AppState>,
) -> bool {
    match msg {
        Message::Text(text) => handle_frame(text.as_str(), session, message_tx, state).await,
        Message::Binary(data) => {
            // The protocol is text-based; tolerate clients that send their
            // payloads as binary frames of UTF-8.
            match std::str::from_utf8(&data) {
                Ok(payload) => handle_frame(payload, session, message_tx, state).await,
                Err(_) => {
                    warn!(bytes = data.len(), "dropping non-UTF-8 binary frame");
                    true
                }
            }
        }
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            info!("WebSocket connection closed by client");
            false
        }
    }
}

/// Dispatch a text frame: control token or audio chunk.
async fn handle_frame(
    payload: &str,
    session: &mut StreamSession,
    message_tx: &mpsc::Sender<MessageRoute>,
    state: &Arc<AppState>,
) -> bool {
    if payload == START_STREAM {
        session.start();
        debug!("capture started");
        let _ = message_tx
            .send(MessageRoute::Outgoing(OutgoingMessage::Status {
                status: "started",
            }))
            .await;
        return true;
    }

    if payload == END_STREAM {
        match session.finish(state.config.stream_concat_chunks) {
            Some(audio) => transcribe_capture(audio, message_tx, state).await,
            None => {
                warn!("capture ended with no audio data buffered");
                let _ = message_tx
                    .send(MessageRoute::Outgoing(OutgoingMessage::Error {
                        error: NO_AUDIO_ERROR.to_string(),
                        details: None,
                    }))
                    .await;
            }
        }
        return true;
    }

    // Anything else is an audio chunk: base64-decode and buffer it. Decode
    // failures drop the frame and the session continues.
    match base64::engine::general_purpose::STANDARD.decode(payload) {
        Ok(chunk) => {
            let bytes = chunk.len();
            if session.push_chunk(chunk.into()) {
                debug!(bytes, chunks = session.chunk_count(), "buffered audio chunk");
            } else {
                warn!("audio chunk received before start token, dropping");
            }
        }
        Err(e) => {
            warn!("dropping undecodable audio chunk: {}", e);
        }
    }

    true
}

/// Persist the captured audio to a temporary file, transcribe it, and send
/// the result. The temporary file is removed before the reply goes out,
/// whether transcription succeeded or not.
async fn transcribe_capture(
    audio: Bytes,
    message_tx: &mpsc::Sender<MessageRoute>,
    state: &Arc<AppState>,
) {
    let temp_path = temp_audio_path();

    if let Err(e) = tokio::fs::write(&temp_path, &audio).await {
        error!(path = %temp_path.display(), "failed to write temporary audio file: {}", e);
        let _ = message_tx
            .send(MessageRoute::Outgoing(OutgoingMessage::Error {
                error: TRANSCRIBE_ERROR.to_string(),
                details: Some(e.to_string()),
            }))
            .await;
        return;
    }

    debug!(path = %temp_path.display(), bytes = audio.len(), "wrote capture to temporary file");

    let result = state
        .transcription
        .transcribe_file(&temp_path, AudioInputFormat::M4a)
        .await;

    if let Err(e) = tokio::fs::remove_file(&temp_path).await {
        warn!(path = %temp_path.display(), "failed to remove temporary audio file: {}", e);
    }

    match result {
        Ok(text) => {
            info!(chars = text.len(), "capture transcribed");
            let _ = message_tx
                .send(MessageRoute::Outgoing(OutgoingMessage::Transcription {
                    text,
                }))
                .await;
        }
        Err(e) => {
            error!("transcription failed: {}", e);
            let _ = message_tx
                .send(MessageRoute::Outgoing(OutgoingMessage::Error {
                    error: TRANSCRIBE_ERROR.to_string(),
                    details: Some(e.to_string()),
                }))
                .await;
        }
    }
}

/// Uniquely-named path for one capture under the OS temp directory.
fn temp_audio_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "{}{}.{}",
        TEMP_FILE_PREFIX,
        Uuid::new_v4(),
        AudioInputFormat::M4a.extension()
    ))
}
