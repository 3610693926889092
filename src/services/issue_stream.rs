//! Paginated issue pipeline.
//!
//! Pages are fetched one at a time. As soon as a page arrives and reports a
//! successor, the successor's fetch is spawned and the task yields once so
//! the request goes out; the current page is then filtered while that
//! request is in flight. At most one fetch is outstanding at any moment and
//! at most one page is held beyond the one being filtered.

use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::{self, Stream};
use tokio::task::JoinHandle;

use crate::domain::errors::{AttentionError, AttentionResult};
use crate::domain::models::{Issue, IssuePage, PageCursor, RawIssueRecord, RepoRef};
use crate::domain::ports::IssueSource;
use crate::services::attention_filter::AttentionFilter;

type PageFetch = JoinHandle<AttentionResult<IssuePage>>;

/// Counters reported when the stream finishes.
#[derive(Debug, Clone, Copy, Default)]
struct RunStats {
    pages: usize,
    inspected: usize,
    emitted: usize,
}

/// Stream the open issues of `repo` that pass `filter`.
///
/// Issues come out in page order, and in API order within a page. The first
/// error ends the stream; nothing is retried. Every call starts again from
/// the first page.
///
/// Must be polled inside a tokio runtime, since page fetches are spawned
/// onto it.
pub fn stream_attention_issues<S>(
    source: Arc<S>,
    repo: RepoRef,
    filter: AttentionFilter,
) -> impl Stream<Item = AttentionResult<Issue>> + Send
where
    S: IssueSource + ?Sized + 'static,
{
    let pipeline = Pipeline {
        source,
        repo,
        filter,
        state: State::NotStarted,
        current: Vec::new().into_iter(),
        seen_cursors: HashSet::new(),
        stats: RunStats::default(),
    };

    stream::unfold(pipeline, |mut pipeline| async move {
        pipeline.next_issue().await.map(|item| (item, pipeline))
    })
}

enum State {
    NotStarted,
    Fetching(PageFetch),
    LastPage,
    Finished,
}

struct Pipeline<S: ?Sized> {
    source: Arc<S>,
    repo: RepoRef,
    filter: AttentionFilter,
    state: State,
    current: std::vec::IntoIter<RawIssueRecord>,
    /// Every cursor requested so far; a repeat means the server is cycling.
    seen_cursors: HashSet<PageCursor>,
    stats: RunStats,
}

impl<S> Pipeline<S>
where
    S: IssueSource + ?Sized + 'static,
{
    fn spawn_fetch(&self, cursor: Option<PageCursor>) -> PageFetch {
        let source = Arc::clone(&self.source);
        let repo = self.repo.clone();
        tracing::debug!(repo = %repo, cursor = ?cursor.as_ref().map(PageCursor::as_str), "Requesting issue page");

        tokio::spawn(async move { source.fetch_issue_page(&repo, cursor.as_ref()).await })
    }

    async fn next_issue(&mut self) -> Option<AttentionResult<Issue>> {
        loop {
            if let Some(issue) = self.next_match() {
                return Some(Ok(issue));
            }

            let fetch = match std::mem::replace(&mut self.state, State::Finished) {
                State::NotStarted => self.spawn_fetch(None),
                State::Fetching(fetch) => fetch,
                State::LastPage => {
                    tracing::info!(
                        repo = %self.repo,
                        pages = self.stats.pages,
                        inspected = self.stats.inspected,
                        emitted = self.stats.emitted,
                        "Issue scan complete"
                    );
                    return None;
                }
                State::Finished => return None,
            };

            let page = match fetch.await {
                Ok(Ok(page)) => page,
                Ok(Err(err)) => return Some(Err(err)),
                Err(err) => {
                    return Some(Err(AttentionError::Transport(format!(
                        "issue page fetch did not complete: {err}"
                    ))))
                }
            };

            self.stats.pages += 1;
            tracing::debug!(
                page = self.stats.pages,
                issues = page.issues.len(),
                has_next = page.next_cursor.is_some(),
                "Received issue page"
            );

            match page.next_cursor {
                Some(cursor) => {
                    if !self.seen_cursors.insert(cursor.clone()) {
                        return Some(Err(AttentionError::Protocol(format!(
                            "pagination cursor '{cursor}' was returned twice"
                        ))));
                    }
                    self.state = State::Fetching(self.spawn_fetch(Some(cursor)));
                    // Let the spawned request start before filtering this page.
                    tokio::task::yield_now().await;
                }
                None => self.state = State::LastPage,
            }

            self.current = page.issues.into_iter();
        }
    }

    fn next_match(&mut self) -> Option<Issue> {
        for record in self.current.by_ref() {
            self.stats.inspected += 1;
            let verdict = self.filter.evaluate(&record);
            tracing::debug!(number = record.number, verdict = %verdict, "Evaluated issue");
            if verdict.is_included() {
                self.stats.emitted += 1;
                return Some(Issue::from(record));
            }
        }
        None
    }
}
