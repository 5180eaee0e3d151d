//! Canned-response transport for testing.
//!
//! Provides a `MockTransport` that answers requests from a table keyed by
//! exact URL without making network calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Error;
use crate::transport::Transport;
use crate::types::JsonResponse;

/// Record of a request.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Requested URL
    pub url: String,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Transport answering from canned responses.
///
/// A URL without a configured response gets `404` with an empty body.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, JsonResponse>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTransport {
    /// Create a mock with no configured responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with status 200 and `body`.
    #[must_use]
    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.with_response(url, JsonResponse::ok(body))
    }

    /// Answer `url` with `response`.
    #[must_use]
    pub fn with_response(mut self, url: &str, response: JsonResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Get all recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of requests made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Get recorded calls for a specific URL.
    #[must_use]
    pub fn calls_for(&self, url: &str) -> Vec<MockCall> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|c| c.url == url)
            .cloned()
            .collect()
    }

    /// Clear recorded calls.
    pub fn reset(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Look up the canned response for `url`, recording the call.
    fn respond(&self, url: &str) -> JsonResponse {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(MockCall::new(url));

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(JsonResponse::not_found)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<JsonResponse, Error> {
        Ok(self.respond(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_known_url_returns_payload() {
        let mock = MockTransport::new().with_json("https://api.github.com/orgs/google", json!({"login": "google"}));

        let response = mock
            .get("https://api.github.com/orgs/google")
            .await
            .expect("mock never fails");
        assert_eq!(response, JsonResponse::ok(json!({"login": "google"})));
    }

    #[tokio::test]
    async fn test_unknown_url_is_not_found() {
        let mock = MockTransport::new().with_json("https://api.github.com/orgs/google", json!({}));

        let response = mock
            .get("https://api.github.com/orgs/GOOGLE")
            .await
            .expect("mock never fails");
        assert_eq!(response.status, 404);
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let mock = MockTransport::new();

        let _ = mock.get("https://a.test").await;
        let _ = mock.get("https://b.test").await;
        let _ = mock.get("https://a.test").await;

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.calls_for("https://a.test").len(), 2);
        assert_eq!(mock.calls()[1].url, "https://b.test");

        mock.reset();
        assert_eq!(mock.call_count(), 0);
    }
}
