//! Git integration adapter
//!
//! Implements the `BranchSource` trait on top of `git2`.
//!
//! - [`hooks`] - Git hooks installation

pub mod hooks;

use std::path::{Path, PathBuf};

use git2::{ErrorCode, ObjectType, Repository};
use log::debug;

use crate::core::ports::{BranchError, BranchSource};

pub use hooks::{HookKind, InstallOutcome, install_hook};

/// Reference namespace stripped from symbolic HEAD targets
const HEADS_NAMESPACE: &str = "refs/heads/";

/// Git-based branch source
///
/// Resolves `HEAD` symbolically first (works on unborn branches too) and
/// falls back to the abbreviated commit hash when `HEAD` is detached.
#[derive(Debug, Clone)]
pub struct GitBranchSource {
    /// Directory the repository is discovered from
    workdir: PathBuf,
}

impl GitBranchSource {
    /// Create a git branch source rooted at `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git branch source for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn open(&self) -> Result<Repository, BranchError> {
        Repository::discover(&self.workdir).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                BranchError::NotARepository(self.workdir.clone())
            } else {
                BranchError::Unresolvable(e.message().to_string())
            }
        })
    }
}

impl BranchSource for GitBranchSource {
    fn current_branch(&self) -> Result<String, BranchError> {
        let repo = self.open()?;
        let raw = resolve_head(&repo)?;
        debug!("HEAD resolved to '{raw}'");
        normalize_branch_name(&raw)
    }
}

/// Symbolic target of `HEAD`, or the short hash of the commit it points at
fn resolve_head(repo: &Repository) -> Result<String, BranchError> {
    let unresolvable = |e: git2::Error| BranchError::Unresolvable(e.message().to_string());

    let head = repo.find_reference("HEAD").map_err(unresolvable)?;
    if let Some(target) = head.symbolic_target() {
        return Ok(target.to_string());
    }

    let commit = head.peel(ObjectType::Commit).map_err(unresolvable)?;
    let short = commit.short_id().map_err(unresolvable)?;
    short
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BranchError::Unresolvable("abbreviated commit id is not UTF-8".to_string()))
}

/// Normalize raw branch output
///
/// Keeps only the first line, strips a leading `refs/heads/` and lower-cases.
///
/// # Errors
///
/// Returns [`BranchError::Empty`] if nothing is left.
pub fn normalize_branch_name(raw: &str) -> Result<String, BranchError> {
    let first_line = raw.lines().next().unwrap_or_default().trim();
    let name = first_line.strip_prefix(HEADS_NAMESPACE).unwrap_or(first_line);

    if name.is_empty() {
        return Err(BranchError::Empty);
    }
    Ok(name.to_lowercase())
}

/// Branch source returning a caller-supplied name
///
/// Used when the branch is passed on the command line, e.g. in CI where
/// `HEAD` is often detached.
#[derive(Debug, Clone)]
pub struct FixedBranchSource {
    name: String,
}

impl FixedBranchSource {
    /// Create a source that always reports `name`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl BranchSource for FixedBranchSource {
    fn current_branch(&self) -> Result<String, BranchError> {
        normalize_branch_name(&self.name)
    }
}

/// Hooks directory of the repository containing `start`
///
/// # Errors
///
/// Returns an error if `start` is not inside a git repository.
pub fn hooks_dir(start: &Path) -> anyhow::Result<PathBuf> {
    let repo = Repository::discover(start)
        .map_err(|_| anyhow::anyhow!("Not a git repository: {}", start.display()))?;
    Ok(repo.path().join("hooks"))
}

/// Working tree root of the repository containing `start`, if any
#[must_use]
pub fn repo_root(start: &Path) -> Option<PathBuf> {
    Repository::discover(start).ok().and_then(|repo| repo.workdir().map(Path::to_path_buf))
}
