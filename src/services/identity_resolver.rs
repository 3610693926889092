//! Resolves who is running the report.

use crate::domain::errors::{AttentionError, AttentionResult};
use crate::domain::models::Identity;
use crate::domain::ports::IssueSource;

/// Ask the API for the authenticated caller's login.
///
/// Runs once, before any issue page is requested; the result drives the
/// self-authored and self-commented checks for the rest of the run.
pub async fn resolve_identity<S>(source: &S) -> AttentionResult<Identity>
where
    S: IssueSource + ?Sized,
{
    let identity = source.fetch_viewer().await?;
    if identity.login().is_empty() {
        return Err(AttentionError::Protocol(
            "viewer login is empty".to_string(),
        ));
    }

    tracing::info!(login = %identity, "Resolved operator identity");
    Ok(identity)
}
