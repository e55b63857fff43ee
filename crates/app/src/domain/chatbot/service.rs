//! Chatbot relay service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, error};

use crate::domain::chatbot::{
    data::{ChatReply, Prompt},
    errors::{ChatbotServiceError, UpstreamFailure},
    upstream::{CompletionRequest, reply_from_body},
};

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "llama3.2-vision:latest";

/// Upper bound on a single upstream exchange when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the upstream chat-completion API.
#[derive(Clone)]
pub struct ChatbotConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ChatbotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatbotConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct HttpChatbotService {
    http: reqwest::Client,
    config: ChatbotConfig,
}

impl HttpChatbotService {
    #[must_use]
    pub fn new(config: ChatbotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn exchange(&self, prompt: &Prompt) -> Result<String, UpstreamFailure> {
        debug!(url = %self.config.api_url, model = %self.config.model, "relaying chat message");

        let response = self
            .http
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .timeout(self.config.timeout)
            .json(&CompletionRequest::user(&self.config.model, prompt.as_str()))
            .send()
            .await
            .map_err(|error| UpstreamFailure::from_transport(&error))?;

        let status = response.status();

        if !status.is_success() {
            return Err(UpstreamFailure::from_status(status));
        }

        response
            .text()
            .await
            .map_err(|error| UpstreamFailure::from_body_read(&error))
    }
}

#[async_trait]
impl ChatbotService for HttpChatbotService {
    async fn relay(&self, prompt: Prompt) -> Result<ChatReply, ChatbotServiceError> {
        match self.exchange(&prompt).await {
            Ok(body) => Ok(ChatReply {
                text: reply_from_body(&body),
            }),
            Err(failure) => {
                error!(code = failure.code(), error = %failure, "chatbot relay failed");

                Err(failure.into())
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait ChatbotService: Send + Sync {
    /// Forward one user message upstream and return the normalised reply.
    async fn relay(&self, prompt: Prompt) -> Result<ChatReply, ChatbotServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::{domain::chatbot::upstream::FALLBACK_REPLY, test::CannedUpstream};

    use super::*;

    fn service(api_url: String, timeout: Duration) -> HttpChatbotService {
        HttpChatbotService::new(ChatbotConfig {
            api_url,
            api_key: "test-key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        })
    }

    async fn relay_to(upstream: &CannedUpstream) -> Result<ChatReply, ChatbotServiceError> {
        service(upstream.url(), DEFAULT_TIMEOUT)
            .relay(Prompt::new("Hello")?)
            .await
    }

    fn expect_failure(result: Result<ChatReply, ChatbotServiceError>, expected: UpstreamFailure) {
        match result {
            Err(ChatbotServiceError::Upstream(failure)) => assert_eq!(failure, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn relay_returns_choices_content() -> TestResult {
        let upstream = CannedUpstream::respond(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"Hi!"}}]}"#,
        )
        .await?;

        let reply = relay_to(&upstream).await?;

        assert_eq!(reply.text, "Hi!");

        Ok(())
    }

    #[tokio::test]
    async fn relay_returns_top_level_response_field() -> TestResult {
        let upstream = CannedUpstream::respond(200, r#"{"response":"Hello there"}"#).await?;

        assert_eq!(relay_to(&upstream).await?.text, "Hello there");

        Ok(())
    }

    #[tokio::test]
    async fn relay_uses_fallback_for_unknown_shape() -> TestResult {
        let upstream = CannedUpstream::respond(200, r#"{"data":"nothing useful"}"#).await?;

        assert_eq!(relay_to(&upstream).await?.text, FALLBACK_REPLY);

        Ok(())
    }

    #[tokio::test]
    async fn relay_sends_bearer_token_and_payload() -> TestResult {
        let upstream = CannedUpstream::respond(200, r#"{"response":"ok"}"#).await?;

        service(upstream.url(), DEFAULT_TIMEOUT)
            .relay(Prompt::new("  Where is my order?  ")?)
            .await?;

        let request = upstream.received().await?;

        assert!(
            request
                .head
                .to_ascii_lowercase()
                .contains("authorization: bearer test-key"),
            "missing bearer header in {:?}",
            request.head
        );

        let payload: Value = serde_json::from_str(&request.body)?;

        assert_eq!(payload["model"], json!(DEFAULT_MODEL));
        assert_eq!(
            payload["messages"],
            json!([{ "role": "user", "content": "Where is my order?" }])
        );
        assert_eq!(payload["max_tokens"], json!(500));

        Ok(())
    }

    #[tokio::test]
    async fn relay_classifies_cut_off_body_as_unknown() -> TestResult {
        let upstream = CannedUpstream::truncated(r#"{"response":"Hel"#).await?;

        expect_failure(relay_to(&upstream).await, UpstreamFailure::Unknown);

        Ok(())
    }

    #[tokio::test]
    async fn relay_classifies_rate_limit() -> TestResult {
        let upstream = CannedUpstream::respond(429, r#"{"error":"slow down"}"#).await?;

        expect_failure(relay_to(&upstream).await, UpstreamFailure::RateLimited);

        Ok(())
    }

    #[tokio::test]
    async fn relay_classifies_bad_credentials() -> TestResult {
        let upstream = CannedUpstream::respond(401, "{}").await?;

        expect_failure(relay_to(&upstream).await, UpstreamFailure::Unauthorized);

        Ok(())
    }

    #[tokio::test]
    async fn relay_classifies_server_errors() -> TestResult {
        let upstream = CannedUpstream::respond(503, "{}").await?;

        expect_failure(relay_to(&upstream).await, UpstreamFailure::Unavailable);

        Ok(())
    }

    #[tokio::test]
    async fn relay_classifies_other_statuses_as_unknown() -> TestResult {
        let upstream = CannedUpstream::respond(400, "{}").await?;

        expect_failure(relay_to(&upstream).await, UpstreamFailure::Unknown);

        Ok(())
    }

    #[tokio::test]
    async fn relay_times_out_on_silent_upstream() -> TestResult {
        let upstream = CannedUpstream::silent().await?;

        let result = service(upstream.url(), Duration::from_millis(200))
            .relay(Prompt::new("Hello")?)
            .await;

        expect_failure(result, UpstreamFailure::Timeout);

        Ok(())
    }

    #[tokio::test]
    async fn relay_reports_connect_failure() -> TestResult {
        let url = CannedUpstream::unreachable_url().await?;

        let result = service(url, DEFAULT_TIMEOUT)
            .relay(Prompt::new("Hello")?)
            .await;

        expect_failure(result, UpstreamFailure::Connect);

        Ok(())
    }
}
