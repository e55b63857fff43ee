//! Chatbot Errors

use tracker_app::domain::chatbot::ChatbotServiceError;

use crate::{errors::ApiError, observability::record_relay_failure};

pub(crate) fn into_api_error(error: ChatbotServiceError) -> ApiError {
    match error {
        ChatbotServiceError::EmptyMessage => ApiError::bad_request("Message is required"),
        ChatbotServiceError::Upstream(failure) => {
            record_relay_failure(failure.code());

            ApiError::upstream(failure)
        }
    }
}
