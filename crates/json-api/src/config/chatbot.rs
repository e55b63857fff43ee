//! Chatbot Config

use std::time::Duration;

use clap::Args;

use tracker_app::domain::chatbot::{ChatbotConfig, DEFAULT_MODEL};

/// Upstream chat-completion settings.
#[derive(Debug, Args)]
pub struct ChatbotArgs {
    /// Chat-completion endpoint URL
    #[arg(long, env = "CHATBOT_API_URL")]
    pub chatbot_api_url: String,

    /// Bearer token sent to the chat-completion endpoint
    #[arg(long, env = "CHATBOT_API_KEY", hide_env_values = true)]
    pub chatbot_api_key: String,

    /// Model name requested from the upstream
    #[arg(long, env = "CHATBOT_MODEL", default_value = DEFAULT_MODEL)]
    pub chatbot_model: String,

    /// Upper bound on one upstream exchange, in seconds
    #[arg(long, env = "CHATBOT_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub chatbot_timeout_seconds: u64,
}

impl ChatbotArgs {
    #[must_use]
    pub fn into_chatbot_config(self) -> ChatbotConfig {
        ChatbotConfig {
            api_url: self.chatbot_api_url,
            api_key: self.chatbot_api_key,
            model: self.chatbot_model,
            timeout: Duration::from_secs(self.chatbot_timeout_seconds),
        }
    }
}
