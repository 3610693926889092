//! Issue domain models.
//!
//! Everything here lives for a single run: records are decoded from API
//! responses, filtered, and the survivors handed to the caller as [`Issue`].

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An issue that needs attention.
///
/// Built only from a record that passed the attention filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Issue title with surrounding whitespace removed.
    pub title: String,
    /// Issue number within the repository.
    pub number: u64,
    /// URL of the issue in the GitHub UI.
    pub url: String,
}

impl Issue {
    /// Create an issue, trimming the title.
    pub fn new(title: &str, number: u64, url: impl Into<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            number,
            url: url.into(),
        }
    }
}

impl From<RawIssueRecord> for Issue {
    fn from(record: RawIssueRecord) -> Self {
        Self::new(&record.title, record.number, record.url)
    }
}

/// Role of a user relative to a repository, as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    Owner,
    Member,
    Collaborator,
    Contributor,
    FirstTimeContributor,
    FirstTimer,
    Mannequin,
    None,
    /// Any value GitHub adds in the future.
    #[serde(other)]
    Other,
}

impl AuthorAssociation {
    /// `OWNER`, `MEMBER` and `COLLABORATOR` count as maintainers.
    pub const fn is_maintainer(self) -> bool {
        matches!(self, Self::Owner | Self::Member | Self::Collaborator)
    }
}

/// The most recent comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// Role of the commenter.
    pub author_association: AuthorAssociation,
    /// Commenter login; absent for deleted accounts.
    pub author_login: Option<String>,
}

/// Full API view of an open issue, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIssueRecord {
    /// Title as returned by the API (untrimmed).
    pub title: String,
    /// Issue number within the repository.
    pub number: u64,
    /// URL of the issue in the GitHub UI.
    pub url: String,
    /// Role of the issue author.
    pub author_association: AuthorAssociation,
    /// Author login; absent for deleted accounts.
    pub author_login: Option<String>,
    /// Logins of the assignees.
    pub assignees: Vec<String>,
    /// Label names.
    pub labels: Vec<String>,
    /// Tail of the comment list. Earlier comments are never fetched.
    pub last_comment: Option<CommentRecord>,
}

/// Opaque pagination token naming the next page of results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of open issues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssuePage {
    /// Issues in the order the API returned them.
    pub issues: Vec<RawIssueRecord>,
    /// Cursor of the following page; `None` on the last page.
    pub next_cursor: Option<PageCursor>,
}

/// The operator's GitHub login, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    pub fn login(&self) -> &str {
        &self.0
    }

    /// Whether `login` names the operator.
    pub fn is(&self, login: Option<&str>) -> bool {
        login.is_some_and(|l| l == self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label names whose issues are never reported.
///
/// Names are stored lowercased; lookups lowercase the probe as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreLabelSet(HashSet<String>);

impl IgnoreLabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(&label.to_lowercase())
    }

    /// First label of `labels` that is in the set.
    pub fn first_match<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        labels
            .iter()
            .map(String::as_str)
            .find(|label| self.contains(label))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreLabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|label| label.as_ref().trim().to_lowercase())
                .filter(|label| !label.is_empty())
                .collect(),
        )
    }
}

/// Repository the report runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_new_trims_title() {
        let issue = Issue::new("  Crash on startup \n", 7, "https://github.com/o/r/issues/7");
        assert_eq!(issue.title, "Crash on startup");
        assert_eq!(issue.number, 7);
    }

    #[test]
    fn test_author_association_deserialization() {
        let parsed: Vec<AuthorAssociation> = serde_json::from_str(
            r#"["OWNER", "MEMBER", "COLLABORATOR", "CONTRIBUTOR", "FIRST_TIME_CONTRIBUTOR", "NONE", "SOMETHING_NEW"]"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            vec![
                AuthorAssociation::Owner,
                AuthorAssociation::Member,
                AuthorAssociation::Collaborator,
                AuthorAssociation::Contributor,
                AuthorAssociation::FirstTimeContributor,
                AuthorAssociation::None,
                AuthorAssociation::Other,
            ]
        );
    }

    #[test]
    fn test_is_maintainer() {
        assert!(AuthorAssociation::Owner.is_maintainer());
        assert!(AuthorAssociation::Member.is_maintainer());
        assert!(AuthorAssociation::Collaborator.is_maintainer());
        assert!(!AuthorAssociation::Contributor.is_maintainer());
        assert!(!AuthorAssociation::None.is_maintainer());
        assert!(!AuthorAssociation::Other.is_maintainer());
    }

    #[test]
    fn test_ignore_label_set_is_case_insensitive() {
        let set: IgnoreLabelSet = ["Snooze", "WONTFIX"].into_iter().collect();
        assert!(set.contains("snooze"));
        assert!(set.contains("SNOOZE"));
        assert!(set.contains("wontFix"));
        assert!(!set.contains("bug"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ignore_label_set_skips_blank_entries() {
        let set: IgnoreLabelSet = ["", "  ", "question"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("Question"));
    }

    #[test]
    fn test_first_match() {
        let set: IgnoreLabelSet = ["snooze"].into_iter().collect();
        let labels = vec!["bug".to_string(), "Snooze".to_string()];
        assert_eq!(set.first_match(&labels), Some("Snooze"));
        assert_eq!(set.first_match(&["bug".to_string()]), None);
    }

    #[test]
    fn test_identity_is() {
        let me = Identity::new("alice");
        assert!(me.is(Some("alice")));
        assert!(!me.is(Some("bob")));
        assert!(!me.is(None));
    }

    #[test]
    fn test_repo_ref_display() {
        assert_eq!(RepoRef::new("rust-lang", "rust").to_string(), "rust-lang/rust");
    }
}
