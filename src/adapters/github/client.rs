//! GitHub GraphQL client.
//!
//! Wraps the GitHub GraphQL API v4 and implements [`IssueSource`] on top of
//! it. Every request is a single POST; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::errors::AttentionResult;
use crate::domain::models::{GitHubConfig, Identity, IssuePage, PageCursor, RepoRef};
use crate::domain::ports::IssueSource;
use crate::infrastructure::logging::SecretScrubber;

use super::error::GitHubApiError;
use super::models::{GraphQlResponse, IssuesData, ViewerData};
use super::queries::{ISSUES_QUERY, VIEWER_QUERY};

/// HTTP client for the GitHub GraphQL API.
///
/// The token, when configured, is attached as a bearer header on every
/// request. Without a token GitHub answers 401, which surfaces as an
/// authentication error.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    scrubber: SecretScrubber,
}

impl GitHubClient {
    /// Build a client from configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        match config.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| GitHubApiError::InvalidToken)?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            _ => tracing::warn!("No GitHub token configured, requests will be unauthenticated"),
        }

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            scrubber: SecretScrubber::new(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run a GraphQL document and decode its `data` into `T`.
    ///
    /// Any entry in the `errors` array fails the request, even when partial
    /// data came back with it.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, GitHubApiError> {
        let body = json!({ "query": query, "variables": variables });

        let resp = self.http.post(&self.api_url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = self.scrubber.scrub_message(&error_body(resp.text().await));
            tracing::warn!(status = %status, "GitHub API request failed");
            return Err(GitHubApiError::from_status(status, body));
        }

        let bytes = resp.bytes().await?;
        let envelope: GraphQlResponse = serde_json::from_slice(&bytes)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .iter()
                .map(|e| match &e.kind {
                    Some(kind) => format!("{kind}: {}", e.message),
                    None => e.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GitHubApiError::GraphQl(message));
        }

        let data = envelope.data.ok_or(GitHubApiError::MissingField("data"))?;
        Ok(serde_json::from_value(data)?)
    }
}

/// Body of a failed response, or why it could not be read.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<body unavailable: {e}>"))
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_viewer(&self) -> AttentionResult<Identity> {
        let data: ViewerData = self.graphql(VIEWER_QUERY, json!({})).await?;
        Ok(Identity::new(data.viewer.login))
    }

    async fn fetch_issue_page(
        &self,
        repo: &RepoRef,
        cursor: Option<&PageCursor>,
    ) -> AttentionResult<IssuePage> {
        let variables = json!({
            "owner": repo.owner,
            "repo": repo.name,
            "cursor": cursor.map(PageCursor::as_str),
        });

        let data: IssuesData = self.graphql(ISSUES_QUERY, variables).await?;
        Ok(data.into_page()?)
    }
}
