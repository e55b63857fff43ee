//! Upstream chat-completion wire format.

use serde::Serialize;
use serde_json::Value;

/// Sampling temperature sent with every completion request.
pub(crate) const TEMPERATURE: f32 = 0.7;

/// Completion length cap sent with every request.
pub(crate) const MAX_TOKENS: u32 = 500;

/// Reply used when the upstream answers in a shape we do not recognise.
pub(crate) const FALLBACK_REPLY: &str =
    "I received your message but couldn't generate a proper response.";

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: [CompletionMessage<'a>; 1],
    pub(crate) temperature: f32,
    pub(crate) max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionMessage<'a> {
    pub(crate) role: &'static str,
    pub(crate) content: &'a str,
}

impl<'a> CompletionRequest<'a> {
    pub(crate) fn user(model: &'a str, content: &'a str) -> Self {
        Self {
            model,
            messages: [CompletionMessage {
                role: "user",
                content,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Pull the reply text out of whichever response shape the upstream used.
///
/// Shapes are tried in order: OpenAI-style `choices[0].message.content`, then top-level
/// `response`, `message` and `content`. Empty strings count as absent.
pub(crate) fn extract_reply(body: &Value) -> Option<&str> {
    ["/choices/0/message/content", "/response", "/message", "/content"]
        .into_iter()
        .filter_map(|pointer| body.pointer(pointer).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

/// Decode a raw upstream body into reply text, falling back to a generic reply.
pub(crate) fn reply_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(extract_reply)
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_carries_fixed_sampling_parameters() -> Result<(), serde_json::Error> {
        let body = serde_json::to_value(CompletionRequest::user("llama", "hello"))?;

        assert_eq!(
            body,
            json!({
                "model": "llama",
                "messages": [{ "role": "user", "content": "hello" }],
                "temperature": 0.7_f32,
                "max_tokens": 500,
            })
        );

        Ok(())
    }

    #[test]
    fn choices_shape_wins_over_other_fields() {
        let body = json!({
            "choices": [{ "message": { "content": "from choices" } }],
            "response": "from response",
        });

        assert_eq!(extract_reply(&body), Some("from choices"));
    }

    #[test]
    fn falls_through_shapes_in_priority_order() {
        assert_eq!(
            extract_reply(&json!({ "response": "r", "message": "m", "content": "c" })),
            Some("r")
        );
        assert_eq!(
            extract_reply(&json!({ "message": "m", "content": "c" })),
            Some("m")
        );
        assert_eq!(extract_reply(&json!({ "content": "c" })), Some("c"));
    }

    #[test]
    fn empty_and_non_string_values_are_skipped() {
        let body = json!({
            "choices": [{ "message": { "content": "" } }],
            "response": { "nested": true },
            "content": "usable",
        });

        assert_eq!(extract_reply(&body), Some("usable"));
    }

    #[test]
    fn unknown_shapes_use_fallback() {
        assert_eq!(reply_from_body(r#"{"data": "nope"}"#), FALLBACK_REPLY);
        assert_eq!(reply_from_body("plain text, not json"), FALLBACK_REPLY);
    }
}
