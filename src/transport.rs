//! HTTP transport for the GitHub API.
//!
//! Network access sits behind the [`Transport`] trait so the organization
//! client can be driven by canned responses in tests. [`HttpTransport`] is the
//! production implementation, with automatic retry on rate limiting and
//! server errors.

use std::time::Duration;

use async_trait::async_trait;
use rand::thread_rng;
use rand::Rng;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, GitHubError};
use crate::types::JsonResponse;

/// Media type requested from the GitHub REST API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Capability to fetch a URL and decode its JSON body.
///
/// Implementations report non-success statuses as a [`JsonResponse`] rather
/// than an error; `Err` is reserved for failures to talk to the server at all.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request for `url`.
    async fn get(&self, url: &str) -> Result<JsonResponse, Error>;
}

/// Fetch `url` once through `transport` and return its JSON body.
///
/// An empty success body decodes to `Value::Null`.
///
/// # Errors
///
/// Returns a typed `GitHubError` for any non-2xx status (404 becomes
/// `GitHubError::NotFound`), or the transport's own error.
pub async fn get_json(transport: &dyn Transport, url: &str) -> Result<Value, Error> {
    let response = transport.get(url).await?;

    if response.is_success() {
        return Ok(response.body.unwrap_or(Value::Null));
    }

    let message = response
        .body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {}", response.status), String::from);

    Err(Error::GitHub(GitHubError::from_status(
        response.status,
        message,
        response.retry_after,
    )))
}

/// Configuration for automatic retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base backoff factor for exponential backoff
    pub backoff_factor: f64,
    /// Status codes that trigger retry
    pub retry_on: Vec<u16>,
    /// Whether to respect Retry-After header
    pub respect_retry_after: bool,
    /// Maximum backoff time in seconds
    pub max_backoff: f64,
    /// Jitter factor (0.1 = ±10%)
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 2.0,
            retry_on: vec![429, 500, 502, 503],
            respect_retry_after: true,
            max_backoff: 60.0,
            jitter: 0.1,
        }
    }
}

/// `reqwest`-backed transport with retry logic.
///
/// Handles:
/// - GitHub media type, user agent and optional bearer token
/// - Exponential backoff with jitter for retries
/// - Retry-After header respect for rate limiting
pub struct HttpTransport {
    client: Client,
    token: Option<String>,
    retry_config: RetryConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// `retry_config` defaults to [`RetryConfig::default`] with
    /// `max_retries` taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config, retry_config: Option<RetryConfig>) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        let retry_config = retry_config.unwrap_or_else(|| RetryConfig {
            max_retries: config.max_retries,
            ..RetryConfig::default()
        });

        Ok(Self {
            client,
            token: config.token.clone(),
            retry_config,
        })
    }

    /// Send one GET and decode the body.
    async fn send_once(&self, url: &str) -> Result<JsonResponse, Error> {
        let mut request = self.client.get(url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;

        let body = if bytes.is_empty() {
            None
        } else if status.is_success() {
            Some(serde_json::from_slice(&bytes)?)
        } else {
            // Error bodies are not always JSON (e.g. proxy HTML pages).
            serde_json::from_slice(&bytes).ok()
        };

        Ok(JsonResponse {
            status: status.as_u16(),
            body,
            retry_after,
        })
    }

    /// Determine if a request should be retried.
    fn should_retry(&self, status_code: u16, attempt: u32) -> bool {
        if attempt >= self.retry_config.max_retries {
            return false;
        }

        self.retry_config.retry_on.contains(&status_code)
    }

    /// Calculate backoff time for retry.
    ///
    /// Uses exponential backoff with jitter, respecting Retry-After header
    /// if present.
    fn get_backoff_time(&self, attempt: u32, retry_after: Option<u32>) -> f64 {
        if let Some(ra) = retry_after {
            if self.retry_config.respect_retry_after {
                return f64::from(ra);
            }
        }

        let max_backoff = self.retry_config.max_backoff.max(0.0);

        // backoff_factor ^ attempt, capped before jitter so it stays finite
        let base_wait = self
            .retry_config
            .backoff_factor
            .powi(i32::try_from(attempt).unwrap_or(i32::MAX))
            .min(max_backoff);

        let wait_time = if self.retry_config.jitter > 0.0 && base_wait > 0.0 {
            let jitter_range = base_wait * self.retry_config.jitter;
            if jitter_range.is_finite() {
                let mut rng = thread_rng();
                base_wait + rng.gen_range(-jitter_range..jitter_range)
            } else {
                base_wait
            }
        } else {
            base_wait
        };

        // NaN from a NaN factor falls through to zero
        if wait_time.is_nan() {
            return 0.0;
        }
        wait_time.clamp(0.0, max_backoff)
    }

    /// Get the retry configuration.
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }
}

fn backoff_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<JsonResponse, Error> {
        let mut attempt = 0;

        loop {
            match self.send_once(url).await {
                Ok(response) => {
                    debug!(url = %url, status = response.status, attempt, "GET completed");

                    if response.is_success() || !self.should_retry(response.status, attempt) {
                        return Ok(response);
                    }

                    let wait_time = self.get_backoff_time(attempt, response.retry_after);
                    warn!(
                        url = %url,
                        status = response.status,
                        attempt,
                        wait_secs = wait_time,
                        "Retrying request"
                    );
                    tokio::time::sleep(backoff_duration(wait_time)).await;
                }
                // Only network errors are retryable; a malformed body will not improve
                Err(e @ Error::Http(_)) => {
                    if attempt >= self.retry_config.max_retries {
                        return Err(e);
                    }

                    let wait_time = self.get_backoff_time(attempt, None);
                    warn!(
                        url = %url,
                        attempt,
                        wait_secs = wait_time,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(backoff_duration(wait_time)).await;
                }
                Err(e) => return Err(e),
            }

            attempt += 1;
        }
    }
}
