//! Client configuration

use std::time::Duration;

/// API base used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Order calls give up after this long.
pub const DEFAULT_ORDERS_TIMEOUT: Duration = Duration::from_secs(10);

/// Chat relays wait on a language model, so they get longer.
pub const DEFAULT_CHATBOT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the API lives and how long each kind of call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout for order calls.
    pub orders_timeout: Duration,

    /// Per-request timeout for chat relays.
    pub chatbot_timeout: Duration,
}

impl ClientConfig {
    /// Default timeouts against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            orders_timeout: DEFAULT_ORDERS_TIMEOUT,
            chatbot_timeout: DEFAULT_CHATBOT_TIMEOUT,
        }
    }

    pub(crate) fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    pub(crate) fn chatbot_url(&self) -> String {
        format!("{}/chatbot", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default();

        assert_eq!(config.orders_url(), "http://localhost:5000/api/orders");
        assert_eq!(config.chatbot_url(), "http://localhost:5000/api/chatbot");
        assert_eq!(config.orders_timeout, Duration::from_secs(10));
        assert_eq!(config.chatbot_timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ClientConfig::new("https://tracker.example.com/api/");

        assert_eq!(config.orders_url(), "https://tracker.example.com/api/orders");
    }
}
