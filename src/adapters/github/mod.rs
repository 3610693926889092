//! GitHub GraphQL adapter.
//!
//! Provides the [`IssueSource`](crate::domain::ports::IssueSource) used in
//! production: viewer lookup and paginated open-issue listing.

pub mod client;
pub mod error;
pub mod models;
pub mod queries;

pub use client::GitHubClient;
pub use error::GitHubApiError;
