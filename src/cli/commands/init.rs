//! Initialize branchlint in a repository

use std::fs;

use branchlint::adapters::git::{self, HookKind};
use branchlint::config;
use branchlint::core::models::Policy;
use branchlint::output::{InitResult, OutputMode};
use branchlint::paths;

/// Write a default `.branchlint.toml` and install the git hook
pub fn init(force: bool, hook: &str, mode: OutputMode) -> anyhow::Result<()> {
    let kind: HookKind = hook.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let cwd = std::env::current_dir()?;
    let hooks_dir = git::hooks_dir(&cwd)?;
    let root = paths::project_root(&cwd);

    if mode == OutputMode::Human {
        println!("Initializing branchlint...\n");
    }

    let config_path = paths::project_config(&root);
    let config_written = if config_path.exists() && !force {
        None
    } else {
        fs::write(&config_path, config::render_toml(&Policy::default())?)?;
        Some(config_path.display().to_string())
    };

    let hook_status = git::install_hook(&hooks_dir, kind)?;

    InitResult {
        config_written,
        hook: kind.to_string(),
        hook_status,
    }
    .render(mode);

    Ok(())
}
