pub mod attention_filter;
pub mod identity_resolver;
pub mod issue_stream;

pub use attention_filter::{AttentionFilter, Verdict};
pub use identity_resolver::resolve_identity;
pub use issue_stream::stream_attention_issues;
