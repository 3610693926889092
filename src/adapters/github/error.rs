//! Error classification for GitHub API responses.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::AttentionError;

/// Errors that can occur when talking to the GitHub GraphQL API
#[derive(Error, Debug)]
pub enum GitHubApiError {
    /// Token missing, invalid, or lacking scope (401, 403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The token cannot be sent as an HTTP header value
    #[error("Token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// Primary or secondary rate limit hit
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other non-success status
    #[error("GitHub API returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Connection, TLS or body read failure
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Body was not the JSON shape we asked for
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// GraphQL `errors` array was present
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// A field the filter depends on was absent
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}

impl GitHubApiError {
    /// Create error from HTTP status code and response body
    ///
    /// - 401: authentication failed
    /// - 403: rate limited when the body says so, otherwise authentication failed
    /// - 429: rate limited
    /// - Other: plain HTTP error
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::AuthenticationFailed(body),
            StatusCode::FORBIDDEN if body.to_lowercase().contains("rate limit") => {
                Self::RateLimited(body)
            }
            StatusCode::FORBIDDEN => Self::AuthenticationFailed(body),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(body),
            _ => Self::Http { status, body },
        }
    }
}

impl From<reqwest::Error> for GitHubApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl From<GitHubApiError> for AttentionError {
    fn from(err: GitHubApiError) -> Self {
        match err {
            GitHubApiError::AuthenticationFailed(_) | GitHubApiError::InvalidToken => {
                Self::Authentication(err.to_string())
            }
            GitHubApiError::RateLimited(_)
            | GitHubApiError::Http { .. }
            | GitHubApiError::Network(_)
            | GitHubApiError::Timeout(_) => Self::Transport(err.to_string()),
            GitHubApiError::Decode(_)
            | GitHubApiError::GraphQl(_)
            | GitHubApiError::MissingField(_) => Self::Protocol(err.to_string()),
        }
    }
}
