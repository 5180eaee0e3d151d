//! Error types for `ghorg`.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A key was absent while walking a nested JSON map
    #[error("Missing key: {key}")]
    MissingKey { key: String },

    /// GitHub API error
    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// Typed errors for non-success GitHub API responses.
///
/// Each variant corresponds to a status class returned by the API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// Bad or missing credentials (401).
    #[error("[{status}] {message}")]
    Authentication { status: u16, message: String },

    /// Access denied (403).
    #[error("[{status}] {message}")]
    Authorization { status: u16, message: String },

    /// Resource not found (404).
    #[error("[{status}] {message}")]
    NotFound { status: u16, message: String },

    /// Rate limited (429).
    #[error("[{status}] {message} (retry after {retry_after}s)")]
    RateLimited {
        status: u16,
        message: String,
        retry_after: u32,
    },

    /// Any other client error (4xx).
    #[error("[{status}] {message}")]
    Validation { status: u16, message: String },

    /// Server errors (5xx).
    #[error("[{status}] {message}")]
    Server { status: u16, message: String },
}

impl GitHubError {
    /// Classify a non-success status code.
    #[must_use]
    pub fn from_status(status: u16, message: String, retry_after: Option<u32>) -> Self {
        match status {
            401 => Self::Authentication { status, message },
            403 => Self::Authorization { status, message },
            404 => Self::NotFound { status, message },
            429 => Self::RateLimited {
                status,
                message,
                retry_after: retry_after.unwrap_or(60),
            },
            s if s >= 500 => Self::Server { status, message },
            _ => Self::Validation { status, message },
        }
    }

    /// Get the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { status, .. }
            | Self::Authorization { status, .. }
            | Self::NotFound { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::Authorization { message, .. }
            | Self::NotFound { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the retry-after value for rate limited errors.
    #[must_use]
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }
}
