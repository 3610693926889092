//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::models::Issue;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    /// One compact JSON line.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Render one result. JSON mode gives a single compact line so the report
/// can be piped line by line.
pub fn render<T: CommandOutput>(result: &T, json_mode: bool) -> serde_json::Result<String> {
    if json_mode {
        result.to_json()
    } else {
        Ok(result.to_human())
    }
}

/// Print one result to stdout.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) -> serde_json::Result<()> {
    println!("{}", render(result, json_mode)?);
    Ok(())
}

/// A single report line.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct IssueOutput(pub Issue);

impl CommandOutput for IssueOutput {
    fn to_human(&self) -> String {
        format!("Issue {}\t{}", self.0.number, self.0.title)
    }
}
