//! Chatbot service errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatbotServiceError {
    #[error("message is required")]
    EmptyMessage,

    #[error("chatbot upstream failure: {0}")]
    Upstream(#[from] UpstreamFailure),
}

/// Why a relay to the upstream chat API failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpstreamFailure {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream rejected the credentials")]
    Unauthorized,

    #[error("upstream rate limit exceeded")]
    RateLimited,

    #[error("upstream unavailable")]
    Unavailable,

    #[error("could not reach upstream")]
    Connect,

    #[error("unexpected upstream failure")]
    Unknown,
}

impl UpstreamFailure {
    /// Classify a non-success upstream status.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            status if status.is_server_error() => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    /// Classify a transport-level failure.
    #[must_use]
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        match error.status() {
            Some(status) => Self::from_status(status),
            None => Self::Connect,
        }
    }

    /// Classify a failure while reading a success response body.
    #[must_use]
    pub fn from_body_read(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Unknown
        }
    }

    /// Stable machine-readable kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate_limited",
            Self::Unavailable => "unavailable",
            Self::Connect => "connect",
            Self::Unknown => "unknown",
        }
    }

    /// Message shown to the person chatting.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Timeout => "The request timed out. Please try again.",
            Self::Unauthorized => "Authentication error with chatbot service.",
            Self::RateLimited => "Too many requests. Please wait a moment and try again.",
            Self::Unavailable => "Chatbot service is temporarily unavailable.",
            Self::Connect => "Unable to connect to chatbot service.",
            Self::Unknown => "Sorry, I'm having trouble connecting right now.",
        }
    }
}
