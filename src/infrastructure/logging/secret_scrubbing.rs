use regex::Regex;
use std::sync::LazyLock;

// Classic (ghp_, gho_, ghu_, ghs_, ghr_) and fine-grained (github_pat_) tokens
static GITHUB_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gh[pousr]_[A-Za-z0-9]{20,}|github_pat_[A-Za-z0-9_]{20,})").unwrap()
});

static BEARER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbearer\s+[A-Za-z0-9\-_\.=]+").unwrap());

static TOKEN_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)["']?(token|access_token)["']?\s*([:=])\s*["']?[^"'\s,}]+["']?"#)
        .unwrap()
});

/// Redacts credentials from text before it reaches logs or error messages.
///
/// Applied to response bodies before they are echoed into transport errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = GITHUB_TOKEN.replace_all(message, "[TOKEN_REDACTED]");
        let scrubbed = BEARER.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        TOKEN_FIELD
            .replace_all(&scrubbed, "$1$2[REDACTED]")
            .into_owned()
    }
}
