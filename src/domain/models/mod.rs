pub mod config;
pub mod issue;

pub use config::{Config, FilterConfig, GitHubConfig, LoggingConfig};
pub use issue::{
    AuthorAssociation, CommentRecord, IgnoreLabelSet, Identity, Issue, IssuePage, PageCursor,
    RawIssueRecord, RepoRef,
};
