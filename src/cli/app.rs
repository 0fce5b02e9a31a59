//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use branchlint::output::OutputMode;

/// branchlint - Branch naming policy guard for git hooks
#[derive(Parser, Debug)]
#[command(
    name = "branchlint",
    version,
    about = "Branch naming policy guard for git hooks",
    long_about = "Validate the current git branch name against a naming policy.\n\n\
                  Branches must use an allowed prefix and separator (feature/login),\n\
                  and must not be banned (wip) or protected (master, develop, staging).\n\
                  Exits 0 when the branch passes, 1 when it is rejected."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Policy file (.toml, or .json); defaults to .branchlint.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint the current branch name (default)
    Lint {
        /// Lint this name instead of the checked-out branch
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Write a default .branchlint.toml and install the git hook
    Init {
        /// Overwrite an existing .branchlint.toml
        #[arg(short, long)]
        force: bool,

        /// Hook to install: pre-push, pre-commit
        #[arg(long, default_value = "pre-push")]
        hook: String,
    },

    /// Print the effective policy
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Lint { branch }) => commands::lint(branch.as_deref(), config, output_mode),
        None => commands::lint(None, config, output_mode),
        Some(Command::Init { force, hook }) => {
            commands::init(force, &hook, output_mode).map(|()| ExitCode::SUCCESS)
        },
        Some(Command::Config) => commands::show_config(config, output_mode).map(|()| ExitCode::SUCCESS),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("branchlint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
