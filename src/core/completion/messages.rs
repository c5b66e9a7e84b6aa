//! Chat completion message types and prompt assembly.
//!
//! The prompt sent upstream is an ordered sequence of turns: the mode's
//! system instruction, optionally the first-message disclaimer as an
//! assistant turn, then the user's message. Assembly is a pure function so
//! the ordering can be tested without a network.

use serde::{Deserialize, Serialize};

use crate::core::modes::{ConversationMode, FIRST_MESSAGE_DISCLAIMER};

/// Speaker attribution for a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Assistant,
    User,
}

/// One turn in the prompt sequence sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Assemble the prompt for one chat turn.
///
/// The disclaimer turn appears only on the first message of a session and
/// always precedes the user turn.
pub fn build_messages(
    mode: ConversationMode,
    message: &str,
    is_first_message: bool,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(mode.system_prompt())];

    if is_first_message {
        messages.push(ChatMessage::assistant(FIRST_MESSAGE_DISCLAIMER));
    }

    messages.push(ChatMessage::user(message));
    messages
}

// =============================================================================
// Wire types
// =============================================================================

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequestBody<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Deserialize)]
pub struct CompletionResponseBody {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
