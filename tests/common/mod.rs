//! Common test utilities for integration tests
//!
//! Provides an in-memory [`IssueSource`] and record builders shared across
//! the pipeline and property tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use needs_attention::{
    AttentionError, AttentionResult, AuthorAssociation, CommentRecord, Identity, IssuePage,
    IssueSource, PageCursor, RawIssueRecord, RepoRef,
};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Issue source serving scripted pages keyed by the cursor that requests them.
///
/// Every request is recorded, and the number of requests running at the same
/// time is tracked.
pub struct ScriptedSource {
    viewer: String,
    pages: HashMap<Option<String>, AttentionResult<IssuePage>>,
    latency: Duration,
    calls: Mutex<Vec<Option<String>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(viewer: &str) -> Self {
        Self {
            viewer: viewer.to_string(),
            pages: HashMap::new(),
            latency: Duration::from_millis(5),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Serve `issues` for `cursor`, pointing at `next` as the following page.
    pub fn page(mut self, cursor: Option<&str>, issues: Vec<RawIssueRecord>, next: Option<&str>) -> Self {
        self.pages.insert(
            cursor.map(ToString::to_string),
            Ok(IssuePage {
                issues,
                next_cursor: next.map(PageCursor::new),
            }),
        );
        self
    }

    /// Fail the request for `cursor` with `error`.
    pub fn failing(mut self, cursor: Option<&str>, error: AttentionError) -> Self {
        self.pages.insert(cursor.map(ToString::to_string), Err(error));
        self
    }

    /// Cursors requested so far, in request order.
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueSource for ScriptedSource {
    async fn fetch_viewer(&self) -> AttentionResult<Identity> {
        Ok(Identity::new(self.viewer.clone()))
    }

    async fn fetch_issue_page(
        &self,
        _repo: &RepoRef,
        cursor: Option<&PageCursor>,
    ) -> AttentionResult<IssuePage> {
        let key = cursor.map(|c| c.as_str().to_string());
        self.calls.lock().unwrap().push(key.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.pages
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(AttentionError::Protocol(format!("no page for {key:?}"))))
    }
}

/// A community issue with no labels, assignees or comments.
pub fn issue(number: u64, title: &str, author: &str) -> RawIssueRecord {
    RawIssueRecord {
        title: title.to_string(),
        number,
        url: format!("https://github.com/acme/widgets/issues/{number}"),
        author_association: AuthorAssociation::None,
        author_login: Some(author.to_string()),
        assignees: vec![],
        labels: vec![],
        last_comment: None,
    }
}

pub fn with_labels(mut record: RawIssueRecord, labels: &[&str]) -> RawIssueRecord {
    record.labels = labels.iter().map(ToString::to_string).collect();
    record
}

pub fn with_association(mut record: RawIssueRecord, association: AuthorAssociation) -> RawIssueRecord {
    record.author_association = association;
    record
}

pub fn with_last_comment(
    mut record: RawIssueRecord,
    association: AuthorAssociation,
    login: &str,
) -> RawIssueRecord {
    record.last_comment = Some(CommentRecord {
        author_association: association,
        author_login: Some(login.to_string()),
    });
    record
}

pub fn repo() -> RepoRef {
    RepoRef::new("acme", "widgets")
}
