//! Domain errors for the attention report.

use thiserror::Error;

/// Errors that abort a run.
///
/// None of these are retried: the pipeline stops at the first one so that an
/// issue is never reported twice or from a half-read page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttentionError {
    /// The API rejected the credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Network failure, timeout, or a non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response did not have the expected shape.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl AttentionError {
    /// Short machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "authentication",
            Self::Transport(_) => "transport",
            Self::Protocol(_) => "protocol",
        }
    }
}

pub type AttentionResult<T> = Result<T, AttentionError>;

impl From<serde_json::Error> for AttentionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}
