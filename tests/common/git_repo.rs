//! Temporary git repository helper for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new temporary git repository
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();

        let repo = Self {
            _temp_dir: temp_dir,
            path,
        };
        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Create a repository with HEAD pointing at `branch` (unborn)
    pub fn on_branch(branch: &str) -> Self {
        let repo = Self::new();
        repo.switch(branch);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point HEAD at `branch` without creating commits
    pub fn switch(&self, branch: &str) {
        let target = format!("refs/heads/{branch}");
        let output = self.git(&["symbolic-ref", "HEAD", &target]);
        assert!(output.status.success(), "Failed to switch to {branch}");
    }

    /// Create an empty commit on the current branch
    pub fn commit(&self, message: &str) {
        let output = self.git(&["commit", "--allow-empty", "--no-verify", "-m", message]);
        assert!(output.status.success(), "Failed to commit");
    }

    /// Detach HEAD at the current commit, returning the short hash
    pub fn detach(&self) -> String {
        let output = self.git(&["checkout", "--detach"]);
        assert!(output.status.success(), "Failed to detach HEAD");
        let short = self.git(&["rev-parse", "--short", "HEAD"]);
        String::from_utf8_lossy(&short.stdout).trim().to_string()
    }

    /// Write a file to the repository
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Run a git command and return output
    pub fn git(&self, args: &[&str]) -> std::process::Output {
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .expect("Failed to run git command")
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}
