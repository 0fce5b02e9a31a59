//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. In human mode, lint
//! diagnostics have already been written to stderr by the message sink.

use serde::Serialize;

use crate::adapters::git::InstallOutcome;
use crate::core::models::{Diagnostic, Status};
use crate::core::services::LintOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a lint run
#[derive(Debug, Serialize)]
pub struct LintReport {
    /// Whether the branch passed
    pub passed: bool,
    /// The branch that was checked
    pub branch: String,
    /// Accept or reject
    pub status: Status,
    /// Diagnostics, in emission order
    pub diagnostics: Vec<Diagnostic>,
    /// Where the policy came from
    pub config: String,
}

impl LintReport {
    /// Build a report from a lint outcome
    #[must_use]
    pub fn new(outcome: LintOutcome, config: impl Into<String>) -> Self {
        Self {
            passed: outcome.verdict.is_accepted(),
            status: outcome.verdict.status,
            diagnostics: outcome.verdict.diagnostics,
            branch: outcome.branch,
            config: config.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.passed {
            eprintln!(
                "\nBranch '{}' rejected ({} problem(s), policy from {}).",
                self.branch,
                self.diagnostics.len(),
                self.config
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a hook/config initialization
#[derive(Debug, Serialize)]
pub struct InitResult {
    /// Config file path, if one was written
    pub config_written: Option<String>,
    /// Hook file that was touched
    pub hook: String,
    /// What happened to the hook
    pub hook_status: InstallOutcome,
}

impl InitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        match &self.config_written {
            Some(path) => println!("  Created {path}"),
            None => println!("  Kept existing config (use --force to overwrite)"),
        }
        match self.hook_status {
            InstallOutcome::Created => println!("  Installed {} hook", self.hook),
            InstallOutcome::Appended => println!("  Added branchlint to existing {} hook", self.hook),
            InstallOutcome::AlreadyInstalled => {
                println!("  {} hook already runs branchlint", self.hook);
            },
        }
        println!("\nbranchlint initialized!");
    }
}
