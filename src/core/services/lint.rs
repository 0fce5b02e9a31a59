//! Lint run orchestration
//!
//! Acquires the branch name, then evaluates it. A branch that cannot be
//! determined is a fatal precondition and no rule is evaluated.

use log::debug;
use serde::Serialize;

use super::evaluator::evaluate;
use crate::core::models::{Policy, Verdict};
use crate::core::ports::{BranchError, BranchSource, MessageSink};

/// Result of a completed lint run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintOutcome {
    /// The branch name that was evaluated (lower-cased)
    pub branch: String,
    /// The evaluation verdict
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Lint the branch reported by `source` against `policy`
///
/// # Errors
///
/// Returns a [`BranchError`] if the source fails or yields an empty name.
pub fn lint(
    source: &dyn BranchSource,
    policy: &Policy,
    sink: &mut dyn MessageSink,
) -> Result<LintOutcome, BranchError> {
    let branch = source.current_branch()?.to_lowercase();
    if branch.is_empty() {
        return Err(BranchError::Empty);
    }
    debug!("Linting branch '{branch}'");

    let verdict = evaluate(&branch, policy, sink);
    debug!("Branch '{branch}': {}", verdict.status);

    Ok(LintOutcome { branch, verdict })
}
