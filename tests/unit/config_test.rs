//! Tests for policy configuration loading

use std::fs;

use branchlint::config::{self, ConfigError, ConfigSource};
use branchlint::{Policy, Status};
use tempfile::TempDir;

use crate::common::run;

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn test_explicit_path_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".branchlint.toml"), "separator = \"-\"\n").unwrap();
    let explicit = temp.path().join("custom.toml");
    fs::write(&explicit, "separator = \"_\"\n").unwrap();

    let loaded = config::load_policy(Some(&explicit), temp.path()).unwrap();

    assert_eq!(loaded.policy.separator(), "_");
    assert_eq!(loaded.source, ConfigSource::File(explicit));
}

#[test]
fn test_project_file_used() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join(".branchlint.toml");
    fs::write(&project, "prefixes = [\"bugfix\"]\n").unwrap();

    let loaded = config::load_policy(None, temp.path()).unwrap();

    assert_eq!(loaded.source, ConfigSource::File(project));
    assert!(loaded.policy.allowed_prefixes().contains("bugfix"));
    assert!(!loaded.policy.allowed_prefixes().contains("feature"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let result = config::load_policy(Some(&missing), temp.path());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

// =============================================================================
// PARSING AND MERGING
// =============================================================================

#[test]
fn test_toml_shallow_merge() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("policy.toml");
    fs::write(
        &path,
        r#"
banned = ["tmp"]
msg_branch_banned = "No %s here"

[suggestions]
bug = "hotfix"
"#,
    )
    .unwrap();

    let loaded = config::load_policy(Some(&path), temp.path()).unwrap();
    let policy = &loaded.policy;

    // Replaced keys
    assert!(policy.banned_names().contains("tmp"));
    assert!(!policy.banned_names().contains("wip"));
    assert_eq!(policy.prefix_suggestions().len(), 1);
    // Untouched keys keep defaults
    assert!(policy.disallowed_names().contains("master"));
    assert_eq!(policy.separator(), "/");

    let (verdict, emitted) = run("tmp", policy);
    assert_eq!(verdict.status, Status::Reject);
    assert_eq!(emitted, vec!["No tmp here"]);
}

#[test]
fn test_json_with_camel_case_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("branchlint.json");
    fs::write(
        &path,
        r#"{
  "prefixes": ["Feature", "Bugfix"],
  "seperator": "-",
  "msgPrefixNotAllowed": "Prefix %s is not welcome."
}"#,
    )
    .unwrap();

    let loaded = config::load_policy(Some(&path), temp.path()).unwrap();

    assert_eq!(loaded.policy.separator(), "-");
    assert!(loaded.policy.allowed_prefixes().contains("bugfix"));
    let (_, emitted) = run("docs-readme", &loaded.policy);
    assert_eq!(emitted, vec!["Prefix docs is not welcome."]);
}

#[test]
fn test_invalid_toml_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "prefixes = [\n").unwrap();

    let err = config::load_policy(Some(&path), temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_empty_separator_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("policy.toml");
    fs::write(&path, "separator = \"\"\n").unwrap();

    let err = config::load_policy(Some(&path), temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Policy(_)));
}

#[test]
fn test_render_toml_is_complete() {
    let rendered = config::render_toml(&Policy::default()).unwrap();
    for key in [
        "prefixes",
        "banned",
        "skip",
        "disallowed",
        "separator",
        "msg_branch_banned",
        "msg_branch_disallowed",
        "msg_prefix_not_allowed",
        "msg_prefix_suggestion",
        "msg_separator_required",
        "[suggestions]",
    ] {
        assert!(rendered.contains(key), "missing {key} in:\n{rendered}");
    }
}
