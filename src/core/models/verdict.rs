//! Evaluation verdicts
//!
//! A [`Verdict`] is the outcome of evaluating one branch name: a status plus
//! the diagnostics produced along the way, in emission order.

use serde::Serialize;

/// Exit code reported for an accepted branch
pub const SUCCESS_CODE: u8 = 0;

/// Exit code reported for a rejected branch
pub const ERROR_CODE: u8 = 1;

/// Accept/reject status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The branch name conforms to the policy
    Accept,
    /// The branch name violates the policy
    Reject,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accept => write!(f, "accept"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Which rule produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Branch is in the banned list
    Banned,
    /// Branch is in the disallowed list
    Disallowed,
    /// Branch does not contain the separator
    SeparatorRequired,
    /// Prefix is not in the allowed set
    PrefixNotAllowed,
    /// A replacement prefix is known for the rejected prefix
    PrefixSuggestion,
}

/// A single formatted diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule that produced it
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
}

/// Result of evaluating one branch name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Accept or reject
    pub status: Status,
    /// Diagnostics in the order they were produced
    pub diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    /// An accepting verdict with no diagnostics
    #[must_use]
    pub const fn accept() -> Self {
        Self {
            status: Status::Accept,
            diagnostics: Vec::new(),
        }
    }

    /// A rejecting verdict carrying `diagnostics`
    #[must_use]
    pub const fn reject(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            status: Status::Reject,
            diagnostics,
        }
    }

    /// Whether the branch was accepted
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accept
    }

    /// Process exit code for this verdict
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.status {
            Status::Accept => SUCCESS_CODE,
            Status::Reject => ERROR_CODE,
        }
    }

    /// Messages only, in emission order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }
}
