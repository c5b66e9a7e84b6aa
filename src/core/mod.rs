pub mod completion;
pub mod modes;
mod provider;
pub mod stt;
pub mod tts;

// Re-export commonly used types for convenience
pub use completion::{
    ChatMessage, CompletionClient, CompletionConfig, Role, build_messages,
};
pub use modes::{ConversationMode, FIRST_MESSAGE_DISCLAIMER};
pub use provider::{ApiErrorDetail, ApiErrorResponse, ProviderError};
pub use stt::{AudioInputFormat, TranscriptionClient, TranscriptionConfig, TranscriptionModel};
pub use tts::{AudioOutputFormat, SpeechClient, SpeechConfig, SpeechModel, SpeechVoice};
