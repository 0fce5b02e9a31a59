//! Git hooks installation
//!
//! Installs a hook that runs `branchlint lint` so a non-conforming branch
//! name stops the push (pre-push) or the commit (pre-commit).
//! Existing hooks are appended to, never replaced.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

/// Marker identifying branchlint's section inside a hook script
const MARKER: &str = "branchlint";

/// Which git hook runs the lint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookKind {
    /// Runs before `git push`
    #[default]
    PrePush,
    /// Runs before `git commit`
    PreCommit,
}

impl HookKind {
    /// File name of the hook inside the hooks directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PrePush => "pre-push",
            Self::PreCommit => "pre-commit",
        }
    }

    fn script(self) -> String {
        format!(
            "#!/bin/sh\n\
             # {MARKER} {} hook\n\
             # Rejects branches whose name breaks the naming policy\n\
             \n\
             branchlint lint || exit 1\n",
            self.file_name()
        )
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

impl std::str::FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre-push" => Ok(Self::PrePush),
            "pre-commit" => Ok(Self::PreCommit),
            _ => Err(format!("Invalid hook: {s}. Use: pre-push, pre-commit")),
        }
    }
}

/// What [`install_hook`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    /// A new hook file was written
    Created,
    /// The lint was appended to an existing hook
    Appended,
    /// The hook already runs branchlint
    AlreadyInstalled,
}

/// Install the hook of `kind` into `hooks_dir`
///
/// # Errors
///
/// Returns an error if the hooks directory or the hook file cannot be written.
pub fn install_hook(hooks_dir: &Path, kind: HookKind) -> anyhow::Result<InstallOutcome> {
    fs::create_dir_all(hooks_dir)?;

    let hook_path = hooks_dir.join(kind.file_name());
    let hook_content = kind.script();

    let outcome = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if existing.contains(MARKER) {
            debug!("{} already runs branchlint", hook_path.display());
            return Ok(InstallOutcome::AlreadyInstalled);
        }
        let body = hook_content.trim_start_matches("#!/bin/sh\n");
        fs::write(&hook_path, format!("{}\n\n# {MARKER}\n{body}", existing.trim()))?;
        InstallOutcome::Appended
    } else {
        fs::write(&hook_path, hook_content)?;
        InstallOutcome::Created
    };

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(outcome)
}
