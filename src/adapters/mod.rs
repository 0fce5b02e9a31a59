//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Branch resolution through `git2`, hook installation
//! - `sink` - stderr and in-memory message sinks

pub mod git;
pub mod sink;

pub use git::{FixedBranchSource, GitBranchSource};
pub use sink::{CollectingSink, StderrSink};
