//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::domain::errors::AttentionError;

/// List open GitHub issues that are waiting on a maintainer response.
#[derive(Parser, Debug)]
#[command(name = "needs-attention", version, about)]
pub struct Cli {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Space-separated labels whose issues are skipped, e.g. "snooze wontfix"
    #[arg(long, value_name = "LABELS")]
    pub ignore_labels: Option<String>,

    /// Always report issues assigned to you
    #[arg(long)]
    pub include_assigned: bool,

    /// Configuration file (defaults to .needs-attention.yaml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format, one object per line
    #[arg(short, long)]
    pub json: bool,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Print the error to stderr and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let kind = err
            .downcast_ref::<AttentionError>()
            .map_or("error", AttentionError::kind);
        let body = serde_json::json!({ "error": format!("{err:#}"), "kind": kind });
        eprintln!("{body}");
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold());
    }
    std::process::exit(1);
}
