//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the rule evaluation logic
//! and the outside world (git, the console).
//!
//! Implementations live in the `adapters` module.

mod branch_source;
mod message_sink;

pub use branch_source::{BranchError, BranchSource};
pub use message_sink::MessageSink;

#[cfg(test)]
pub(crate) use branch_source::MockBranchSource;
#[cfg(test)]
pub(crate) use message_sink::MockMessageSink;
