//! Raw transport response.

use serde_json::Value;

/// Status code plus optional JSON body, as produced by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded body, `None` when empty
    pub body: Option<Value>,
    /// `Retry-After` header in seconds, if the server sent one
    pub retry_after: Option<u32>,
}

impl JsonResponse {
    /// A 200 response carrying `body`.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self::with_status(200, Some(body))
    }

    /// A response with an arbitrary status and no `Retry-After`.
    #[must_use]
    pub fn with_status(status: u16, body: Option<Value>) -> Self {
        Self {
            status,
            body,
            retry_after: None,
        }
    }

    /// A 404 response with an empty body.
    #[must_use]
    pub fn not_found() -> Self {
        Self::with_status(404, None)
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_is_empty() {
        let response = JsonResponse::not_found();
        assert_eq!(response.status, 404);
        assert!(response.body.is_none());
        assert!(!response.is_success());
    }

    #[test]
    fn test_ok_is_success() {
        let response = JsonResponse::ok(json!({"login": "google"}));
        assert!(response.is_success());
        assert_eq!(response.body, Some(json!({"login": "google"})));
    }
}
