//! Route labels for spans and metrics.

/// Label for any path outside the route table.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the fixed route table so metric label sets stay bounded.
///
/// Any single segment under `/api/orders` is labelled `{id}`, parsable or not.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api", "orders"] => "/api/orders",
        ["api", "orders", _] => "/api/orders/{id}",
        ["api", "chatbot"] => "/api/chatbot",
        ["api-doc", ..] => "/api-doc",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}
