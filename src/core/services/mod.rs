//! Business logic services
//!
//! - [`evaluator`] - Rule evaluation for a single branch name
//! - [`lint`] - Branch acquisition followed by evaluation
//! - [`template`] - `%s` message template formatting

pub mod evaluator;
pub mod lint;
pub mod template;

pub use evaluator::evaluate;
pub use lint::{LintOutcome, lint};
pub use template::format_message;
