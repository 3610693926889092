//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueSource: read-only issue tracker access
//!
//! The services depend only on these traits, never on a concrete HTTP client.

pub mod issue_source;

pub use issue_source::IssueSource;
