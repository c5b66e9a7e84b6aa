//! Speech synthesis gateway.

mod config;
mod provider;

pub use config::{
    AudioOutputFormat, SPEED_MAX, SPEED_MIN, SpeechConfig, SpeechModel, SpeechVoice,
};
pub use provider::{AUDIO_SPEECH_PATH, SpeechClient};
