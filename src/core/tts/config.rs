//! Configuration types for the speech synthesis client.
//!
//! The relay always speaks with one fixed voice, model, and format; the
//! enums here exist so those choices live in one place and parse cleanly
//! if they are ever made configurable.

use serde::{Deserialize, Serialize};

// =============================================================================
// Models
// =============================================================================

/// Supported speech synthesis models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeechModel {
    /// Standard quality, lower latency
    #[serde(rename = "tts-1")]
    Tts1,
    /// High definition audio - used for all relay responses
    #[default]
    #[serde(rename = "tts-1-hd")]
    Tts1Hd,
}

impl SpeechModel {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tts1 => "tts-1",
            Self::Tts1Hd => "tts-1-hd",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tts-1" | "tts1" => Self::Tts1,
            "tts-1-hd" | "tts1-hd" => Self::Tts1Hd,
            _ => Self::default(),
        }
    }
}

// =============================================================================
// Voices
// =============================================================================

/// Supported synthesis voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechVoice {
    Alloy,
    Echo,
    Fable,
    Nova,
    Onyx,
    /// One of the most natural-sounding voices - the relay default
    #[default]
    Shimmer,
}

impl SpeechVoice {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Nova => "nova",
            Self::Onyx => "onyx",
            Self::Shimmer => "shimmer",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "alloy" => Self::Alloy,
            "echo" => Self::Echo,
            "fable" => Self::Fable,
            "nova" => Self::Nova,
            "onyx" => Self::Onyx,
            "shimmer" => Self::Shimmer,
            _ => Self::default(),
        }
    }
}

// =============================================================================
// Output format
// =============================================================================

/// Audio container for the synthesized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioOutputFormat {
    /// MP3 - what the mobile client plays back
    #[default]
    Mp3,
    Opus,
    Aac,
    Wav,
}

impl AudioOutputFormat {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Wav => "wav",
        }
    }
}

// =============================================================================
// Client configuration
// =============================================================================

/// Valid speaking speed range accepted by the API.
pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 4.0;

/// Configuration for the speech synthesis client.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Provider API key.
    pub api_key: String,
    /// Provider base URL.
    pub base_url: String,
    /// Synthesis model.
    pub model: SpeechModel,
    /// Voice for all replies.
    pub voice: SpeechVoice,
    /// Playback speed, clamped to the valid range on use.
    pub speed: f32,
    /// Output container.
    pub response_format: AudioOutputFormat,
}

impl SpeechConfig {
    /// Build a config with the relay's fixed synthesis parameters.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            model: SpeechModel::default(),
            voice: SpeechVoice::default(),
            speed: 1.0,
            response_format: AudioOutputFormat::default(),
        }
    }

    /// The speed to send, clamped to the API's accepted range.
    pub fn clamped_speed(&self) -> f32 {
        self.speed.clamp(SPEED_MIN, SPEED_MAX)
    }
}
