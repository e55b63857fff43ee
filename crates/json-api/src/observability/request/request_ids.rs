//! Request correlation ids.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's id when it sent a usable one, otherwise mint a UUIDv7.
pub(super) fn resolve(incoming: Option<String>) -> String {
    incoming
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn echo(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "request id is not a valid header value: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_id_is_kept() {
        assert_eq!(resolve(Some(" abc-123 ".to_owned())), "abc-123");
    }

    #[test]
    fn blank_or_missing_id_is_generated() {
        for incoming in [None, Some(String::new()), Some("   ".to_owned())] {
            let id = resolve(incoming);

            assert!(Uuid::parse_str(&id).is_ok(), "expected a uuid, got {id:?}");
        }
    }
}
