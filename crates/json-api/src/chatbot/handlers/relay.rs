//! Chatbot Relay Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tracker_app::domain::chatbot::data::Prompt;

use crate::{
    chatbot::errors::into_api_error, errors::ApiError, extensions::DepotExt as _, state::State,
};

/// Chat Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatRequest {
    /// Text typed by the user
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat Response
///
/// The same reply under three names, for clients that read any one of them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatResponse {
    pub message: String,
    pub reply: String,
    pub response: String,
}

impl ChatResponse {
    fn repeated(text: String) -> Self {
        Self {
            message: text.clone(),
            reply: text.clone(),
            response: text,
        }
    }
}

/// Chatbot Relay Handler
///
/// Forwards one message to the upstream chat model and returns its reply.
#[endpoint(
    tags("chatbot"),
    summary = "Relay Chat Message",
    responses(
        (status_code = StatusCode::OK, description = "Reply from the chat model"),
        (status_code = StatusCode::BAD_REQUEST, description = "Message is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Upstream failure, see `code`"),
    ),
)]
#[tracing::instrument(name = "chatbot.relay", skip_all, err(Debug))]
pub(crate) async fn handler(
    json: JsonBody<ChatRequest>,
    depot: &mut Depot,
) -> Result<Json<ChatResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let message = json.into_inner().message.unwrap_or_default();
    let prompt = Prompt::new(&message).map_err(into_api_error)?;

    let reply = state
        .app
        .chatbot
        .relay(prompt)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ChatResponse::repeated(reply.text)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tracker_app::domain::chatbot::{
        ChatbotServiceError, MockChatbotService, UpstreamFailure, data::ChatReply,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{chatbot_service, strict_chatbot_mock},
    };

    use super::*;

    fn make_service(chatbot: MockChatbotService) -> Service {
        chatbot_service(chatbot, Router::with_path("api/chatbot").post(handler))
    }

    fn failing(failure: UpstreamFailure) -> MockChatbotService {
        let mut chatbot = MockChatbotService::new();

        chatbot
            .expect_relay()
            .once()
            .return_once(move |_| Err(ChatbotServiceError::Upstream(failure)));

        chatbot
    }

    #[tokio::test]
    async fn test_relay_repeats_reply_in_all_fields() -> TestResult {
        let mut chatbot = MockChatbotService::new();

        chatbot
            .expect_relay()
            .once()
            .withf(|prompt| prompt.as_str() == "Where is my order?")
            .return_once(|_| {
                Ok(ChatReply {
                    text: "Hi!".to_string(),
                })
            });

        let mut res = TestClient::post("http://example.com/api/chatbot")
            .json(&json!({ "message": "  Where is my order?  " }))
            .send(&make_service(chatbot))
            .await;

        let body: ChatResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Hi!");
        assert_eq!(body.reply, "Hi!");
        assert_eq!(body.response, "Hi!");

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_blank_message_returns_400_without_upstream_call() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/chatbot")
            .json(&json!({ "message": "   " }))
            .send(&make_service(strict_chatbot_mock()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Message is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_missing_or_null_message_returns_400() -> TestResult {
        for payload in [json!({}), json!({ "message": null })] {
            let mut res = TestClient::post("http://example.com/api/chatbot")
                .json(&payload)
                .send(&make_service(strict_chatbot_mock()))
                .await;

            let body: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(body.message, "Message is required");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_malformed_json_returns_400_with_message() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/chatbot")
            .raw_json("{\"message\": ")
            .send(&make_service(strict_chatbot_mock()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_timeout_returns_500_with_timeout_message() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/chatbot")
            .json(&json!({ "message": "Hello" }))
            .send(&make_service(failing(UpstreamFailure::Timeout)))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "The request timed out. Please try again.");
        assert_eq!(body.code.as_deref(), Some("timeout"));

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_rate_limited_returns_500_with_rate_limit_message() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/chatbot")
            .json(&json!({ "message": "Hello" }))
            .send(&make_service(failing(UpstreamFailure::RateLimited)))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body.reply.as_deref(),
            Some("Too many requests. Please wait a moment and try again.")
        );
        assert_eq!(body.code.as_deref(), Some("rate_limited"));

        Ok(())
    }
}
