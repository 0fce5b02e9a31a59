//! Common test utilities shared across test types
//!
//! - `git_repo.rs` - Temporary git repository helper

pub mod git_repo;
