//! GraphQL documents sent to GitHub.

/// Login of the authenticated caller, at `data.viewer.login`.
pub const VIEWER_QUERY: &str = r"
query {
  viewer {
    login
  }
}
";

/// One page of open issues.
///
/// Only the last comment is requested: whoever spoke last decides whether
/// the issue is still waiting on someone.
pub const ISSUES_QUERY: &str = r"
query($owner: String!, $repo: String!, $cursor: String) {
  repository(owner: $owner, name: $repo) {
    issues(first: 100, after: $cursor, states: [OPEN]) {
      nodes {
        title
        number
        url
        authorAssociation
        author {
          login
        }
        assignees(first: 100) {
          nodes {
            login
          }
        }
        labels(first: 100) {
          nodes {
            name
          }
        }
        comments(last: 1) {
          nodes {
            authorAssociation
            author {
              login
            }
          }
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}
";
