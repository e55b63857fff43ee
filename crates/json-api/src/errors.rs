//! JSON error responses.

use salvo::{
    Scribe,
    catcher::Catcher,
    http::ResBody,
    oapi::{Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tracker_app::domain::chatbot::UpstreamFailure;

/// Error body returned by every API failure.
///
/// Relay failures repeat the message under `reply` and `response` and add a
/// machine-readable `code` so chat clients can read whichever field they know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable description of the failure
    pub message: String,

    /// Failure kind for relay errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Relay compatibility copy of `message`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,

    /// Relay compatibility copy of `message`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// An HTTP status paired with the JSON body describing it.
#[derive(Debug, Clone)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                message: message.into(),
                code: None,
                reply: None,
                response: None,
            },
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Generic 500; the cause is logged by the caller, never sent.
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Body for an error status salvo raised itself, such as an unreadable request body.
    fn from_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Invalid request data",
            StatusCode::NOT_FOUND => "Not found",
            _ if status.is_server_error() => "Internal server error",
            _ => status.canonical_reason().unwrap_or("Request failed"),
        };

        Self::new(status, message)
    }

    /// A relay failure: always 500, tagged with the failure kind.
    pub(crate) fn upstream(failure: UpstreamFailure) -> Self {
        let message = failure.user_message().to_string();

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                code: Some(failure.code().to_string()),
                reply: Some(message.clone()),
                response: Some(message.clone()),
                message,
            },
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}

/// Replace salvo's default error pages with the `{message}` body every handler uses.
#[handler]
async fn json_error_page(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    res.body(ResBody::None);
    ApiError::from_status(status).render(res);

    ctrl.skip_rest();
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(json_error_page)
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::CONFLICT,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            operation.responses.insert(
                status.as_str(),
                salvo::oapi::Response::new(status.canonical_reason().unwrap_or("Error"))
                    .add_content(
                        "application/json",
                        Content::new(ErrorResponse::to_schema(components)),
                    ),
            );
        }
    }
}
