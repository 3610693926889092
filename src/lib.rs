//! needs-attention - find GitHub issues waiting on a maintainer
//!
//! Walks the open issues of a repository page by page and reports those
//! where the last word does not belong to a maintainer or to the person
//! running the report.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the `IssueSource` port
//! - **Service Layer** (`services`): identity resolution, attention filter, issue stream
//! - **Adapters** (`adapters`): GitHub GraphQL client implementing the port
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use futures::TryStreamExt;
//! use needs_attention::{
//!     resolve_identity, stream_attention_issues, AttentionFilter, GitHubClient, GitHubConfig,
//!     RepoRef,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(GitHubClient::new(&GitHubConfig::default())?);
//!     let identity = resolve_identity(client.as_ref()).await?;
//!     let filter = AttentionFilter::new(["snooze"].into_iter().collect(), identity);
//!     let issues = stream_attention_issues(client, RepoRef::new("acme", "widgets"), filter);
//!     futures::pin_mut!(issues);
//!     while let Some(issue) = issues.try_next().await? {
//!         println!("{} {}", issue.number, issue.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::github::{GitHubApiError, GitHubClient};
pub use domain::errors::{AttentionError, AttentionResult};
pub use domain::models::{
    AuthorAssociation, CommentRecord, Config, GitHubConfig, IgnoreLabelSet, Identity, Issue,
    IssuePage, PageCursor, RawIssueRecord, RepoRef,
};
pub use domain::ports::IssueSource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{resolve_identity, stream_attention_issues, AttentionFilter, Verdict};
