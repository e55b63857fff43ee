//! Chatbot Data

use crate::domain::chatbot::errors::ChatbotServiceError;

/// A user message that is safe to forward upstream: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Build a prompt from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ChatbotServiceError::EmptyMessage`] when the input is blank.
    pub fn new(raw: &str) -> Result<Self, ChatbotServiceError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ChatbotServiceError::EmptyMessage);
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalised upstream reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
}
