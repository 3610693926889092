use async_trait::async_trait;

use crate::domain::errors::AttentionResult;
use crate::domain::models::{Identity, IssuePage, PageCursor, RepoRef};

/// Read-only access to the issue tracker.
///
/// One implementation holds one HTTP session; every request of a run goes
/// through it. Implementations must be cheap to share behind an `Arc`, since
/// page prefetches run as separate tasks.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Identify the authenticated caller.
    async fn fetch_viewer(&self) -> AttentionResult<Identity>;

    /// Fetch one page of open issues. `None` requests the first page.
    async fn fetch_issue_page(
        &self,
        repo: &RepoRef,
        cursor: Option<&PageCursor>,
    ) -> AttentionResult<IssuePage>;
}
