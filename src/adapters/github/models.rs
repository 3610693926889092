//! GitHub GraphQL response models.
//!
//! These structs mirror the selections in [`super::queries`]. They are used
//! internally by the GitHub adapter and converted into domain records before
//! leaving it.

use serde::Deserialize;

use crate::domain::models::{
    AuthorAssociation, CommentRecord, IssuePage, PageCursor, RawIssueRecord,
};

use super::error::GitHubApiError;

/// Top-level GraphQL envelope.
///
/// `data` is kept as raw JSON so that an `errors` array can be reported even
/// when `data` is partially null.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    /// Machine-readable category such as `NOT_FOUND`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// `data` of the viewer query.
#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub login: String,
}

/// `data` of the issues query.
#[derive(Debug, Deserialize)]
pub struct IssuesData {
    #[serde(deserialize_with = "Option::deserialize")]
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    pub issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub nodes: Vec<IssueNode>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub end_cursor: Option<String>,
}

/// An open issue as selected by the issues query.
///
/// Nullable fields must still be present: an absent key fails decoding
/// instead of reading as "no author" or "no labels".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNode {
    pub title: String,
    pub number: u64,
    pub url: String,
    pub author_association: AuthorAssociation,
    /// Null when the account was deleted.
    #[serde(deserialize_with = "Option::deserialize")]
    pub author: Option<Actor>,
    pub assignees: Connection<Actor>,
    /// GitHub types this connection as nullable.
    #[serde(deserialize_with = "Option::deserialize")]
    pub labels: Option<Connection<Label>>,
    pub comments: Connection<CommentNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub author_association: AuthorAssociation,
    #[serde(deserialize_with = "Option::deserialize")]
    pub author: Option<Actor>,
}

#[derive(Debug, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Any `{ nodes: [...] }` connection.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl IssuesData {
    /// Convert into a domain page.
    ///
    /// The cursor is only kept when GitHub says another page exists.
    pub fn into_page(self) -> Result<IssuePage, GitHubApiError> {
        let connection = self
            .repository
            .ok_or(GitHubApiError::MissingField("repository"))?
            .issues;

        let next_cursor = if connection.page_info.has_next_page {
            let cursor = connection
                .page_info
                .end_cursor
                .ok_or(GitHubApiError::MissingField("pageInfo.endCursor"))?;
            Some(PageCursor::new(cursor))
        } else {
            None
        };

        Ok(IssuePage {
            issues: connection.nodes.into_iter().map(RawIssueRecord::from).collect(),
            next_cursor,
        })
    }
}

impl From<IssueNode> for RawIssueRecord {
    fn from(node: IssueNode) -> Self {
        Self {
            title: node.title,
            number: node.number,
            url: node.url,
            author_association: node.author_association,
            author_login: node.author.map(|a| a.login),
            assignees: node.assignees.nodes.into_iter().map(|a| a.login).collect(),
            labels: node
                .labels
                .map(|l| l.nodes.into_iter().map(|label| label.name).collect())
                .unwrap_or_default(),
            last_comment: node.comments.nodes.into_iter().last().map(|c| CommentRecord {
                author_association: c.author_association,
                author_login: c.author.map(|a| a.login),
            }),
        }
    }
}
