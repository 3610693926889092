//! The report: resolve the operator, walk the open issues, print the ones
//! needing attention.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::TryStreamExt;

use crate::adapters::github::GitHubClient;
use crate::cli::output::{output, IssueOutput};
use crate::cli::Cli;
use crate::domain::models::{Config, IgnoreLabelSet, RepoRef};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::{resolve_identity, stream_attention_issues, AttentionFilter};

pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    ConfigLoader::validate(&config)?;

    let log_config = LogConfig::try_from(&config.logging)?;
    let _logger = LoggerImpl::init(&log_config)?;

    let repo = RepoRef::new(cli.owner, cli.repo);
    tracing::info!(repo = %repo, "Scanning open issues");

    let client = Arc::new(
        GitHubClient::new(&config.github).context("Failed to build GitHub client")?,
    );

    let identity = resolve_identity(client.as_ref()).await?;

    let ignore_labels: IgnoreLabelSet = config.filter.ignore_labels.iter().collect();
    let filter = AttentionFilter::new(ignore_labels, identity)
        .with_assignment_override(config.filter.assignment_override);

    let issues = stream_attention_issues(client, repo, filter);
    futures::pin_mut!(issues);

    while let Some(issue) = issues.try_next().await? {
        output(&IssueOutput(issue), cli.json).context("Failed to write issue")?;
    }

    Ok(())
}

/// Layer explicit flags on top of the loaded configuration.
///
/// `--ignore-labels` adds to the configured list rather than replacing it.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(token) = &cli.token {
        config.github.token = Some(token.clone());
    }

    if let Some(labels) = &cli.ignore_labels {
        config
            .filter
            .ignore_labels
            .extend(labels.split_whitespace().map(ToString::to_string));
    }

    if cli.include_assigned {
        config.filter.assignment_override = true;
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
}
