//! Configuration types for the transcription client.

use serde::{Deserialize, Serialize};

// =============================================================================
// Models
// =============================================================================

/// Supported transcription models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TranscriptionModel {
    /// Original Whisper model - what the relay uses for all transcription
    #[default]
    #[serde(rename = "whisper-1")]
    Whisper1,
}

impl TranscriptionModel {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whisper1 => "whisper-1",
        }
    }
}

// =============================================================================
// Audio input format
// =============================================================================

/// Audio containers the relay forwards for transcription.
///
/// The one-shot endpoint receives MP3 from the client; the streaming
/// session captures M4A from the device recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioInputFormat {
    /// MP3 format
    #[default]
    Mp3,
    /// M4A format (Apple audio)
    M4a,
    /// WAV format (PCM audio)
    Wav,
    /// WebM format
    Webm,
}

impl AudioInputFormat {
    /// Get the MIME type for this format.
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/m4a",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the file extension for this format.
    #[inline]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Wav => "wav",
            Self::Webm => "webm",
        }
    }
}

// =============================================================================
// Client configuration
// =============================================================================

/// Language hint sent with every transcription request.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for the transcription client.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Provider API key.
    pub api_key: String,
    /// Provider base URL.
    pub base_url: String,
    /// Transcription model.
    pub model: TranscriptionModel,
    /// Language hint (ISO 639-1).
    pub language: String,
}

impl TranscriptionConfig {
    /// Build a config with the relay's fixed transcription parameters.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            model: TranscriptionModel::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
