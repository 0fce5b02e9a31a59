//! Centralized path definitions for branchlint
//!
//! This module provides a single source of truth for the filesystem paths
//! branchlint reads its policy from.
//!
//! ## Layout
//!
//! ```text
//! repo/
//! └── .branchlint.toml          # Project policy, committed
//!
//! <config_dir>/branchlint/
//! └── config.toml               # User-level fallback policy
//! ```
//!
//! `<config_dir>` is `$XDG_CONFIG_HOME` (or `~/.config`) on Linux and the
//! platform equivalent elsewhere.

use std::path::{Path, PathBuf};

use crate::adapters::git;

/// Project configuration filename
pub const BRANCHLINT_TOML: &str = ".branchlint.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "branchlint";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the project root directory.
///
/// The working tree root of the repository containing `start`, or `start`
/// itself when it is not inside a repository.
#[must_use]
pub fn project_root(start: &Path) -> PathBuf {
    git::repo_root(start).unwrap_or_else(|| start.to_path_buf())
}

/// Get path to the project's `.branchlint.toml`.
#[must_use]
pub fn project_config(root: &Path) -> PathBuf {
    root.join(BRANCHLINT_TOML)
}

/// Get the global config file path.
///
/// Returns `<config_dir>/branchlint/config.toml`, or `None` when the
/// platform has no config directory.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR).join(GLOBAL_CONFIG_FILE))
}
