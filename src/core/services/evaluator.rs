//! Policy evaluator
//!
//! Decides whether a branch name conforms to a [`Policy`]. Rules run in a
//! fixed order and the first terminal rule wins:
//!
//! 1. skip list (accept, overrides everything)
//! 2. banned list
//! 3. disallowed list
//! 4. separator presence
//! 5. prefix taxonomy, with an optional one-hop suggestion
//!
//! This is pure business logic with no I/O apart from the [`MessageSink`].

use log::debug;

use super::template::format_message;
use crate::core::models::{Diagnostic, DiagnosticKind, Policy, Verdict};
use crate::core::ports::MessageSink;

/// Evaluate `branch` against `policy`
///
/// Each diagnostic is handed to `sink` as soon as it is produced, so a
/// prefix rejection followed by a suggestion reaches the sink as two
/// separate messages, in that order. The branch name is compared
/// lower-cased.
#[must_use]
pub fn evaluate(branch: &str, policy: &Policy, sink: &mut dyn MessageSink) -> Verdict {
    let branch = branch.to_lowercase();
    let messages = policy.messages();
    let mut reporter = Reporter::new(sink);

    if policy.skip_names().contains(&branch) {
        debug!("'{branch}' is in the skip list");
        return Verdict::accept();
    }

    if policy.banned_names().contains(&branch) {
        debug!("'{branch}' is banned");
        reporter.report(DiagnosticKind::Banned, &messages.branch_banned, &[branch.as_str()]);
        return reporter.into_verdict();
    }

    if policy.disallowed_names().contains(&branch) {
        debug!("'{branch}' is disallowed");
        reporter.report(DiagnosticKind::Disallowed, &messages.branch_disallowed, &[branch.as_str()]);
        return reporter.into_verdict();
    }

    let separator = policy.separator();
    let Some((prefix, name)) = branch.split_once(separator) else {
        debug!("'{branch}' has no '{separator}' separator");
        reporter.report(
            DiagnosticKind::SeparatorRequired,
            &messages.separator_required,
            &[branch.as_str(), separator],
        );
        return reporter.into_verdict();
    };

    if policy.allowed_prefixes().contains(prefix) {
        debug!("'{branch}' uses allowed prefix '{prefix}'");
        return Verdict::accept();
    }

    debug!("'{branch}' uses unknown prefix '{prefix}'");
    reporter.report(DiagnosticKind::PrefixNotAllowed, &messages.prefix_not_allowed, &[prefix]);

    if let Some(suggested) = policy.prefix_suggestions().get(prefix) {
        let name = Some(name).filter(|n| !n.is_empty());
        let current = join_branch(prefix, separator, name);
        let proposed = join_branch(suggested, separator, name);
        reporter.report(
            DiagnosticKind::PrefixSuggestion,
            &messages.prefix_suggestion,
            &[current.as_str(), proposed.as_str()],
        );
    }

    reporter.into_verdict()
}

/// Rebuild a branch name; an absent name drops the separator too
fn join_branch(prefix: &str, separator: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{prefix}{separator}{name}"),
        None => prefix.to_string(),
    }
}

/// Formats diagnostics, forwards them to the sink and keeps them for the verdict
struct Reporter<'a> {
    sink: &'a mut dyn MessageSink,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Reporter<'a> {
    fn new(sink: &'a mut dyn MessageSink) -> Self {
        Self {
            sink,
            diagnostics: Vec::new(),
        }
    }

    fn report(&mut self, kind: DiagnosticKind, template: &str, args: &[&str]) {
        let message = format_message(template, args);
        self.sink.emit(&message);
        self.diagnostics.push(Diagnostic { kind, message });
    }

    fn into_verdict(self) -> Verdict {
        Verdict::reject(self.diagnostics)
    }
}
