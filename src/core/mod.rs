//! Core domain logic for branchlint
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Policy, Verdict, Diagnostic)
//! - `services/` - Rule evaluation and lint orchestration
//! - `ports/` - Trait definitions for the branch source and message sink

pub mod models;
pub mod ports;
pub mod services;
