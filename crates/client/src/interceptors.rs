//! Request and response interceptors shared by every endpoint.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, error, warn};

use crate::{errors::ClientError, models::ErrorBody, tokens::TokenStore};

/// Attach the stored bearer token, if any, and log the outgoing call.
pub(crate) fn on_request(
    api: &str,
    builder: RequestBuilder,
    method: &Method,
    url: &str,
    tokens: &dyn TokenStore,
) -> RequestBuilder {
    debug!(api, %method, url, "sending request");

    match tokens.token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Log the response and turn failure statuses into typed errors.
///
/// Returns the raw body of a success response. A 401 clears the stored token.
pub(crate) async fn on_response(
    api: &str,
    response: Response,
    tokens: &dyn TokenStore,
) -> Result<String, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| on_transport_error(api, source))?;

    if status.is_success() {
        debug!(api, %status, body = %body, "response received");

        return Ok(body);
    }

    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|error| error.message)
        .unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => {
            tokens.clear();
            warn!(api, %status, "unauthorized; stored token cleared");
        }
        StatusCode::NOT_FOUND => warn!(api, %status, message, "resource not found"),
        status if status.is_server_error() => error!(api, %status, message, "server error"),
        status => warn!(api, %status, message, "request rejected"),
    }

    Err(ClientError::from_status(status, message))
}

/// Log and classify a failure to get any response at all.
pub(crate) fn on_transport_error(api: &str, source: reqwest::Error) -> ClientError {
    let error = ClientError::from_transport(source);

    match &error {
        ClientError::Timeout => error!(api, "request timed out"),
        error => error!(api, error = ?error, "network error; server may be down"),
    }

    error
}
