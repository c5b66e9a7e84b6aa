//! Conversation modes and their system prompts.
//!
//! Each mode selects the fixed system instruction that opens the prompt sent
//! to the completion service. The set here is the single source of truth:
//! the gateway rejects any tag it does not recognize.

use serde::{Deserialize, Serialize};

/// The conversation flavor chosen by the client for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationMode {
    /// Supportive mental-health conversation.
    Therapy,
    /// Relationship counseling.
    Relationship,
    /// Career coaching.
    Career,
    /// Life coaching and goal-setting.
    Life,
}

impl ConversationMode {
    /// Every recognized mode, in a stable order.
    pub const ALL: [ConversationMode; 4] = [
        ConversationMode::Therapy,
        ConversationMode::Relationship,
        ConversationMode::Career,
        ConversationMode::Life,
    ];

    /// Parse a wire tag. Returns `None` for anything unrecognized; callers
    /// surface that as an invalid-mode error rather than falling back.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "therapy" => Some(Self::Therapy),
            "relationship" => Some(Self::Relationship),
            "career" => Some(Self::Career),
            "life" => Some(Self::Life),
            _ => None,
        }
    }

    /// The wire tag for this mode.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Therapy => "therapy",
            Self::Relationship => "relationship",
            Self::Career => "career",
            Self::Life => "life",
        }
    }

    /// The fixed system instruction opening every prompt in this mode.
    ///
    /// Replies are spoken aloud by the client, so every prompt asks for
    /// concise, natural responses.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Therapy => {
                "You are a supportive AI therapist specializing in mental health and \
                 emotional well-being. Your tone is gentle, empathetic, and non-judgmental. \
                 Focus on helping users explore their feelings and thoughts while maintaining \
                 appropriate boundaries. Keep your responses concise and natural, as they \
                 will be spoken out loud."
            }
            Self::Relationship => {
                "You are an AI relationship counselor helping users navigate relationship \
                 challenges. Provide balanced perspectives and communication strategies. \
                 Your responses should be supportive and practical, focusing on healthy \
                 relationship dynamics. Keep responses natural and conversational, as they \
                 will be spoken out loud."
            }
            Self::Career => {
                "You are an AI career coach helping users with professional development and \
                 career decisions. Provide practical guidance, help explore options, and \
                 offer strategies for professional growth. Keep your responses focused and \
                 actionable, as they will be spoken out loud."
            }
            Self::Life => {
                "You are an AI life coach helping users work towards personal goals and \
                 life direction. Focus on motivation, goal-setting, and practical steps \
                 while maintaining realistic expectations. Keep your responses encouraging \
                 and actionable, as they will be spoken out loud."
            }
        }
    }
}

impl std::fmt::Display for ConversationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Disclaimer inserted as an assistant turn on the first message of a
/// session, before the user's opening message reaches the model.
pub const FIRST_MESSAGE_DISCLAIMER: &str = "IMPORTANT: This AI chat service is not a substitute for professional medical advice, diagnosis, or treatment. \
If you're experiencing a mental health emergency or having thoughts of self-harm, please contact emergency services or a mental health crisis hotline immediately. \
This service is designed for general support and stress relief only. Always consult qualified healthcare providers for medical or mental health concerns.";
