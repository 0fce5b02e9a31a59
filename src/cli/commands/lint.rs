//! Lint the current branch name

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use branchlint::adapters::{CollectingSink, FixedBranchSource, GitBranchSource, StderrSink};
use branchlint::config;
use branchlint::core::ports::{BranchSource, MessageSink};
use branchlint::core::services;
use branchlint::output::{LintReport, OutputMode};
use branchlint::paths;

/// Lint the checked-out branch, or `branch` when given (pre-push hook)
pub fn lint(branch: Option<&str>, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let root = paths::project_root(&cwd);
    let loaded = config::load_policy(config_path, &root)?;

    let source: Box<dyn BranchSource> = match branch {
        Some(name) => Box::new(FixedBranchSource::new(name)),
        None => Box::new(GitBranchSource::new(cwd)),
    };

    let mut stderr_sink = StderrSink::new();
    let mut collecting_sink = CollectingSink::new();
    let sink: &mut dyn MessageSink = match mode {
        OutputMode::Human => &mut stderr_sink,
        OutputMode::Json => &mut collecting_sink,
    };

    let outcome = services::lint(source.as_ref(), &loaded.policy, sink)
        .context("Branch name lint aborted")?;
    let code = outcome.verdict.exit_code();

    LintReport::new(outcome, loaded.source.to_string()).render(mode);

    Ok(ExitCode::from(code))
}
