//! Branch name source port
//!
//! Defines where the name of the currently checked-out branch comes from.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when no branch name can be produced
///
/// These are fatal preconditions: the lint run stops before any rule is evaluated.
#[derive(Debug, Error)]
pub enum BranchError {
    /// The working directory is not inside a repository
    #[error("Unable to determine branch name: {} is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    /// HEAD exists but could not be resolved to a branch or commit
    #[error("Unable to determine branch name: {0}")]
    Unresolvable(String),

    /// Resolution succeeded but produced an empty name
    #[error("Unable to determine branch name: resolved name is empty")]
    Empty,
}

/// Source of the current branch name
///
/// Implementations return the name lower-cased with any `refs/heads/`
/// namespace removed, or fail with an explicit [`BranchError`]. They never
/// return an empty string.
#[cfg_attr(test, mockall::automock)]
pub trait BranchSource {
    /// Get the current branch name
    fn current_branch(&self) -> Result<String, BranchError>;
}
