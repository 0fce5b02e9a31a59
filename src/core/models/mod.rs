//! Domain models for branchlint
//!
//! - [`Policy`] - Naming rules and message templates for one evaluation
//! - [`Verdict`] - Accept/reject status plus ordered diagnostics

mod policy;
mod verdict;

pub use policy::{MessageTemplates, Policy, PolicyError, PolicyOverrides};
pub use verdict::{Diagnostic, DiagnosticKind, Status, Verdict};
