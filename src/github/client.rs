//! Rate-limited GitHub REST client.
//!
//! Thin wrapper over `reqwest` that routes every call through a shared
//! [`RequestScheduler`] and classifies failures into [`GitHubError`].

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::limiter::RequestScheduler;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("gitgauge/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Rate-limited GitHub API client.
///
/// Cloning is cheap (Arc clones); all clones share one scheduler, so the
/// process-wide request rate stays bounded even across concurrent runs.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    scheduler: Arc<RequestScheduler>,
    token: String,
    base_uri: String,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create a client with a personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Create a client from the `GITHUB_TOKEN` environment variable.
    ///
    /// A missing token is a configuration error returned to the caller,
    /// never a process abort.
    pub fn from_env() -> GitHubResult<Self> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Self::with_token(token),
            _ => Err(GitHubError::Config(format!(
                "{TOKEN_ENV_VAR} environment variable not set"
            ))),
        }
    }

    /// GET a JSON endpoint under the API base, e.g. `repos/{owner}/{repo}/commits`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> GitHubResult<T> {
        let response = self.dispatch(path, query, "application/vnd.github+json").await?;
        response
            .json::<T>()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))
    }

    /// GET a file-content endpoint (readme, contents) as raw text.
    ///
    /// Uses the `raw` media type so the body arrives undecoded instead of
    /// as a base64 JSON envelope.
    pub async fn get_raw(&self, path: &str) -> GitHubResult<String> {
        let response = self.dispatch(path, &[], "application/vnd.github.raw+json").await?;
        response
            .text()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))
    }

    /// Issue one scheduled request and classify any failure.
    async fn dispatch(
        &self,
        path: &str,
        query: &[(&str, String)],
        accept: &str,
    ) -> GitHubResult<reqwest::Response> {
        let url = format!("{}/{path}", self.base_uri);
        debug!("GET {url}");

        let request = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, accept)
            .send();

        let response = self.scheduler.schedule(request).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Err(GitHubError::from_status(
            status.as_u16(),
            remaining.as_deref(),
            path,
        ))
    }
}

/// Builder for creating a `GitHubClient`.
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    scheduler: Option<Arc<RequestScheduler>>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            scheduler: None,
        }
    }

    /// Set the personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URI (for GitHub Enterprise or tests)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Share an existing scheduler instead of constructing a fresh one.
    ///
    /// Embedding hosts that score many repositories concurrently pass one
    /// scheduler to every client so the global rate stays capped.
    pub fn scheduler(mut self, scheduler: Arc<RequestScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let token = self
            .token
            .ok_or_else(|| GitHubError::Config("no access token provided".to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        let scheduler = self.scheduler.unwrap_or_else(|| {
            Arc::new(RequestScheduler::new(3, Duration::from_millis(100)))
        });

        Ok(GitHubClient {
            http,
            scheduler,
            token,
            base_uri: self
                .base_uri
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
