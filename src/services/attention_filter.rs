//! Attention filter.
//!
//! Decides, per issue, whether somebody outside the maintainer team is
//! waiting on a response. Rules are checked in a fixed order and the first
//! one that decides wins:
//!
//! 1. Assignment override (opt-in): assigned to the operator, always kept.
//! 2. Ignored label: dropped.
//! 3. Opened by a maintainer or by the operator: dropped.
//! 4. Most recent comment by a maintainer or by the operator: dropped.
//! 5. Otherwise kept.

use std::fmt;

use crate::domain::models::{IgnoreLabelSet, Identity, RawIssueRecord};

/// Outcome of evaluating one issue, naming the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Assigned to the operator with the override enabled.
    Assigned,
    /// Nobody from the maintainer side has had the last word.
    AwaitingResponse,
    /// Carries a label from the ignore set.
    IgnoredLabel(String),
    /// Opened by an owner, member or collaborator.
    MaintainerAuthored,
    /// Opened by the operator.
    SelfAuthored,
    /// Last comment came from an owner, member or collaborator.
    MaintainerResponded,
    /// Last comment came from the operator.
    OperatorResponded,
}

impl Verdict {
    pub const fn is_included(&self) -> bool {
        matches!(self, Self::Assigned | Self::AwaitingResponse)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned => f.write_str("assigned to operator"),
            Self::AwaitingResponse => f.write_str("awaiting response"),
            Self::IgnoredLabel(label) => write!(f, "ignored label '{label}'"),
            Self::MaintainerAuthored => f.write_str("opened by a maintainer"),
            Self::SelfAuthored => f.write_str("opened by operator"),
            Self::MaintainerResponded => f.write_str("maintainer commented last"),
            Self::OperatorResponded => f.write_str("operator commented last"),
        }
    }
}

/// Attention policy for one run.
///
/// Holds no mutable state, so evaluating the same record twice always gives
/// the same verdict.
#[derive(Debug, Clone)]
pub struct AttentionFilter {
    ignore_labels: IgnoreLabelSet,
    identity: Identity,
    assignment_override: bool,
}

impl AttentionFilter {
    /// Create a filter with the assignment override disabled.
    pub fn new(ignore_labels: IgnoreLabelSet, identity: Identity) -> Self {
        Self {
            ignore_labels,
            identity,
            assignment_override: false,
        }
    }

    /// Keep every issue assigned to the operator regardless of other rules.
    #[must_use]
    pub fn with_assignment_override(mut self, enabled: bool) -> Self {
        self.assignment_override = enabled;
        self
    }

    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    pub const fn ignore_labels(&self) -> &IgnoreLabelSet {
        &self.ignore_labels
    }

    pub const fn assignment_override(&self) -> bool {
        self.assignment_override
    }

    pub fn evaluate(&self, issue: &RawIssueRecord) -> Verdict {
        if self.assignment_override
            && issue
                .assignees
                .iter()
                .any(|login| self.identity.is(Some(login.as_str())))
        {
            return Verdict::Assigned;
        }

        if let Some(label) = self.ignore_labels.first_match(&issue.labels) {
            return Verdict::IgnoredLabel(label.to_string());
        }

        if issue.author_association.is_maintainer() {
            return Verdict::MaintainerAuthored;
        }
        if self.identity.is(issue.author_login.as_deref()) {
            return Verdict::SelfAuthored;
        }

        if let Some(comment) = &issue.last_comment {
            if comment.author_association.is_maintainer() {
                return Verdict::MaintainerResponded;
            }
            if self.identity.is(comment.author_login.as_deref()) {
                return Verdict::OperatorResponded;
            }
        }

        Verdict::AwaitingResponse
    }

    pub fn needs_attention(&self, issue: &RawIssueRecord) -> bool {
        self.evaluate(issue).is_included()
    }
}
