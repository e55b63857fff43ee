//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    chatbot::ChatbotArgs,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod chatbot;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Order Tracker JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tracker-json", about = "Order Tracker JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Upstream chat model settings.
    #[command(flatten)]
    pub chatbot: ChatbotArgs,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Address the listener binds to
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 7] = [
        "tracker-json",
        "--database-url",
        "postgres://localhost/tracker",
        "--chatbot-api-url",
        "http://localhost:11434/v1/chat/completions",
        "--chatbot-api-key",
        "secret",
    ];

    #[test]
    fn defaults_apply_when_only_required_flags_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.database.database_max_connections, 10);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        let chatbot = config.chatbot.into_chatbot_config();

        assert_eq!(chatbot.model, "llama3.2-vision:latest");
        assert_eq!(chatbot.timeout, Duration::from_secs(30));
        assert_eq!(chatbot.api_key, "secret");

        Ok(())
    }

    #[test]
    fn chatbot_settings_are_required() {
        let result = ServerConfig::try_parse_from(REQUIRED.into_iter().take(3));

        assert!(result.is_err(), "expected missing chatbot flags to fail");
    }

    #[test]
    fn port_and_timeout_can_be_overridden() -> TestResult {
        let args = REQUIRED
            .into_iter()
            .chain(["--port", "8080", "--host", "127.0.0.1"])
            .chain(["--chatbot-timeout-seconds", "5"]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.chatbot.into_chatbot_config().timeout,
            Duration::from_secs(5)
        );

        Ok(())
    }

    #[test]
    fn host_must_be_an_ip_address() {
        let args = REQUIRED.into_iter().chain(["--host", "not-an-ip"]);

        assert!(ServerConfig::try_parse_from(args).is_err());
    }
}
