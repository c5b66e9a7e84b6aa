//! Streaming session wire protocol.
//!
//! Client-to-server frames are either one of the literal control tokens or a
//! base64-encoded audio chunk. Server-to-client frames are JSON envelopes
//! tagged by `type`.

use serde::Serialize;

/// Control token opening (or restarting) a capture session.
pub const START_STREAM: &str = "START_STREAM";

/// Control token ending a capture session and requesting transcription.
pub const END_STREAM: &str = "END_STREAM";

/// Outgoing WebSocket envelopes to the client.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum OutgoingMessage {
    /// Acknowledgement of a control token.
    #[serde(rename = "status")]
    Status {
        /// Session status, e.g. "started"
        status: &'static str,
    },

    /// Transcript of the captured audio.
    #[serde(rename = "transcription")]
    Transcription {
        /// Transcribed text
        text: String,
    },

    /// In-band error; the connection stays open.
    #[serde(rename = "error")]
    Error {
        /// Client-facing error message
        error: String,
        /// Failure detail, present on transcription errors
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

/// Message routing between the receive loop and the sender task.
pub enum MessageRoute {
    /// JSON text envelope
    Outgoing(OutgoingMessage),
    /// Close connection
    Close,
}
