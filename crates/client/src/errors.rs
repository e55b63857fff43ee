//! Client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Why an API call failed.
///
/// Variants built from an HTTP response carry the server's `message` when it sent one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered 401; the stored token has been cleared.
    #[error("session expired")]
    Unauthorized,

    /// The server answered 404.
    #[error("not found: {message}")]
    NotFound {
        /// Server explanation, empty when absent
        message: String,
    },

    /// The server answered with a 5xx status.
    #[error("server error ({status}): {message}")]
    Server {
        /// Status the server answered with
        status: StatusCode,
        /// Server explanation, empty when absent
        message: String,
    },

    /// Any other non-success status, such as a 400 validation failure.
    #[error("request rejected ({status}): {message}")]
    Status {
        /// Status the server answered with
        status: StatusCode,
        /// Server explanation, empty when absent
        message: String,
    },

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server could not be reached.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Message suitable for showing next to the form that triggered the call.
    ///
    /// Falls back to `fallback` when the server did not explain itself.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::NotFound { message }
            | Self::Server { message, .. }
            | Self::Status { message, .. }
                if !message.is_empty() =>
            {
                message
            }
            Self::Unauthorized => "Your session has expired. Please sign in again.",
            _ => fallback,
        }
    }

    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound { message },
            status if status.is_server_error() => Self::Server { status, message },
            status => Self::Status { status, message },
        }
    }

    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error)
        }
    }
}
