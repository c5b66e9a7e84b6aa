//! Chat completion gateway.
//!
//! Given an assembled prompt, produces the assistant's full text reply by
//! calling the provider's chat completions endpoint.

mod client;
mod messages;

pub use client::{
    CHAT_COMPLETIONS_PATH, COMPLETION_MAX_TOKENS, COMPLETION_MODEL, COMPLETION_TEMPERATURE,
    CompletionClient, CompletionConfig,
};
pub use messages::{
    ChatMessage, CompletionRequestBody, CompletionResponseBody, Role, build_messages,
};
