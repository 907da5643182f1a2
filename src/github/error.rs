//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations.
///
/// Every failed call is classified into exactly one of these variants.
/// The client performs no retries, so callers always see the first failure.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport-level failure; no response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Rate limit exhausted (403/429 with a zero-remaining quota header)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Authentication required or failed (401, or 403 without the quota signal)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Other client-side error (4xx)
    #[error("Client error: {status}")]
    Client { status: u16 },

    /// Server-side error (5xx)
    #[error("Server error: {status}")]
    Server { status: u16 },

    /// Client setup/configuration error (e.g. missing access token)
    #[error("Client setup failed: {0}")]
    Config(String),

    /// Unexpected payload shape from the API
    #[error("Malformed API response: {0}")]
    Decode(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Classify a failed HTTP response by status code and rate-limit header.
    ///
    /// `rate_limit_remaining` is the raw `x-ratelimit-remaining` header
    /// value when present.
    pub fn from_status(status: u16, rate_limit_remaining: Option<&str>, context: &str) -> Self {
        match status {
            403 | 429 if rate_limit_remaining == Some("0") => GitHubError::RateLimitExceeded,
            401 => GitHubError::Auth("Unauthorized. Invalid or missing GitHub token.".to_string()),
            403 => GitHubError::Auth(format!("Forbidden. No permission to access {context}.")),
            404 => GitHubError::NotFound(context.to_string()),
            400..=499 => GitHubError::Client { status },
            _ => GitHubError::Server { status },
        }
    }

    /// True when the error means the resource simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::NotFound(_))
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::Transport(e.to_string())
    }
}
