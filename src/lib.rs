//! branchlint - Validate git branch names against a naming policy
//!
//! This library provides the policy evaluator and the plumbing around it:
//! branch name acquisition through git, diagnostic sinks, policy
//! configuration loading, and hook installation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code for a run that could not evaluate anything (no branch, bad config)
pub const FATAL_CODE: u8 = 2;

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{Policy, PolicyOverrides, Status, Verdict};
pub use crate::core::services::{evaluate, lint};
