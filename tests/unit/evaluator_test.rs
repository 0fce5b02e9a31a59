//! Tests for the policy evaluator
//!
//! Covers the rule precedence and the default-policy scenarios.

use branchlint::Status;
use branchlint::core::models::DiagnosticKind;

use crate::common::{PolicyBuilder, run, run_default};

// =============================================================================
// DEFAULT POLICY SCENARIOS
// =============================================================================

#[test]
fn feature_branch_is_accepted() {
    let (verdict, emitted) = run_default("feature/login");
    assert_eq!(verdict.status, Status::Accept);
    assert!(verdict.diagnostics.is_empty());
    assert!(emitted.is_empty());
}

#[test]
fn banned_branch_is_rejected() {
    let (verdict, emitted) = run_default("wip");
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted, vec![r#"Branches with the name "wip" are not allowed."#]);
}

#[test]
fn disallowed_branch_is_rejected() {
    let (verdict, emitted) = run_default("master");
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted, vec![r#"Pushing to "master" is not allowed, use git-flow."#]);
}

#[test]
fn missing_separator_is_rejected() {
    let (verdict, emitted) = run_default("hotfixlogin");
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted, vec![r#"Branch "hotfixlogin" must contain a separator "/"."#]);
}

#[test]
fn known_misspelled_prefix_gets_suggestion() {
    let (verdict, emitted) = run_default("fix/login");
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(
        emitted,
        vec![
            r#"Branch prefix "fix" is not allowed."#.to_string(),
            r#"Instead of "fix/login" try "hotfix/login"."#.to_string(),
        ]
    );
    assert_eq!(verdict.diagnostics[0].kind, DiagnosticKind::PrefixNotAllowed);
    assert_eq!(verdict.diagnostics[1].kind, DiagnosticKind::PrefixSuggestion);
}

#[test]
fn unknown_prefix_without_suggestion() {
    let (verdict, emitted) = run_default("chore/cleanup");
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted, vec![r#"Branch prefix "chore" is not allowed."#]);
}

// =============================================================================
// PRECEDENCE
// =============================================================================

#[test]
fn skip_exempts_banned_and_disallowed() {
    let policy = PolicyBuilder::new().skip(&["wip", "master"]).build();

    for branch in ["wip", "master"] {
        let (verdict, emitted) = run(branch, &policy);
        assert_eq!(verdict.status, Status::Accept, "branch={branch}");
        assert!(emitted.is_empty());
    }
}

#[test]
fn skip_exempts_malformed_names() {
    let policy = PolicyBuilder::new().skip(&["dependabot"]).build();
    let (verdict, _) = run("dependabot", &policy);
    assert!(verdict.is_accepted());
}

#[test]
fn disallowed_checked_before_separator() {
    let policy = PolicyBuilder::new().disallowed(&["release/legacy"]).build();
    let (verdict, _) = run("release/legacy", &policy);
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(verdict.diagnostics[0].kind, DiagnosticKind::Disallowed);
}

#[test]
fn banned_name_with_separator_is_still_banned() {
    let policy = PolicyBuilder::new().banned(&["feature/wip"]).build();
    let (verdict, emitted) = run("feature/wip", &policy);
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted.len(), 1);
    assert!(emitted[0].contains("feature/wip"));
}

// =============================================================================
// CONFIGURED POLICIES
// =============================================================================

#[test]
fn custom_prefixes_replace_defaults() {
    let policy = PolicyBuilder::new().prefixes(&["bugfix"]).build();
    assert!(run("bugfix/crash", &policy).0.is_accepted());
    assert!(!run("feature/login", &policy).0.is_accepted());
}

#[test]
fn custom_suggestion_uses_configured_separator() {
    let policy = PolicyBuilder::new()
        .separator("-")
        .prefixes(&["feature"])
        .suggestions(&[("feat", "feature")])
        .build();

    let (_, emitted) = run("feat-search", &policy);
    assert_eq!(emitted[1], r#"Instead of "feat-search" try "feature-search"."#);
}

#[test]
fn mixed_case_policy_entries_match() {
    let policy = PolicyBuilder::new().prefixes(&["Feature"]).banned(&["WIP"]).build();
    assert!(run("FEATURE/x", &policy).0.is_accepted());
    assert_eq!(run("wip", &policy).0.status, Status::Reject);
}

#[test]
fn messages_report_lowercased_branch() {
    let (_, emitted) = run_default("Master");
    assert_eq!(emitted, vec![r#"Pushing to "master" is not allowed, use git-flow."#]);
}

#[test]
fn evaluation_is_idempotent() {
    let policy = PolicyBuilder::new().build();
    assert_eq!(run("fix/login", &policy), run("fix/login", &policy));
}
