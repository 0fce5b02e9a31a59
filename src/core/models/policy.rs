//! Branch naming policy
//!
//! A [`Policy`] is built once per run from the built-in defaults and an
//! optional set of [`PolicyOverrides`]. Overrides replace defaults key by key;
//! nested values (sets, maps) are never merged.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a policy
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The separator must contain at least one character
    #[error("separator must not be empty")]
    EmptySeparator,
}

/// Message templates, one per diagnostic kind
///
/// Each template uses positional `%s` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    /// Banned branch (`%s` = branch)
    pub branch_banned: String,
    /// Disallowed branch (`%s` = branch)
    pub branch_disallowed: String,
    /// Prefix not in the allowed set (`%s` = prefix)
    pub prefix_not_allowed: String,
    /// Prefix suggestion (`%s` = current branch, `%s` = suggested branch)
    pub prefix_suggestion: String,
    /// Missing separator (`%s` = branch, `%s` = separator)
    pub separator_required: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            branch_banned: r#"Branches with the name "%s" are not allowed."#.to_string(),
            branch_disallowed: r#"Pushing to "%s" is not allowed, use git-flow."#.to_string(),
            prefix_not_allowed: r#"Branch prefix "%s" is not allowed."#.to_string(),
            prefix_suggestion: r#"Instead of "%s" try "%s"."#.to_string(),
            separator_required: r#"Branch "%s" must contain a separator "%s"."#.to_string(),
        }
    }
}

/// Caller-supplied policy options
///
/// Every key is optional; a present key replaces the default wholesale.
/// The camelCase names and the `seperator` spelling used by older
/// configurations are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverrides {
    /// Allowed branch prefixes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,

    /// Branch names that are always rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned: Option<Vec<String>>,

    /// Branch names exempt from every check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<Vec<String>>,

    /// Branch names that must never be the active branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallowed: Option<Vec<String>>,

    /// Delimiter between prefix and name
    #[serde(default, alias = "seperator", skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Template for banned branches
    #[serde(default, alias = "msgBranchBanned", skip_serializing_if = "Option::is_none")]
    pub msg_branch_banned: Option<String>,

    /// Template for disallowed branches
    #[serde(default, alias = "msgBranchDisallowed", skip_serializing_if = "Option::is_none")]
    pub msg_branch_disallowed: Option<String>,

    /// Template for prefixes outside the allowed set
    #[serde(default, alias = "msgPrefixNotAllowed", skip_serializing_if = "Option::is_none")]
    pub msg_prefix_not_allowed: Option<String>,

    /// Template for prefix suggestions
    #[serde(default, alias = "msgPrefixSuggestion", skip_serializing_if = "Option::is_none")]
    pub msg_prefix_suggestion: Option<String>,

    /// Template for a missing separator
    #[serde(
        default,
        alias = "msgSeparatorRequired",
        alias = "msgSeperatorRequired",
        skip_serializing_if = "Option::is_none"
    )]
    pub msg_separator_required: Option<String>,

    /// Misspelled prefix -> canonical prefix
    ///
    /// Kept last so TOML output places the table after plain values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<BTreeMap<String, String>>,
}

/// Immutable naming policy for one evaluation
///
/// All names are stored lower-cased so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    allowed_prefixes: BTreeSet<String>,
    prefix_suggestions: BTreeMap<String, String>,
    banned_names: BTreeSet<String>,
    disallowed_names: BTreeSet<String>,
    skip_names: BTreeSet<String>,
    separator: String,
    messages: MessageTemplates,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_prefixes: normalize_set(["feature", "hotfix", "release"]),
            prefix_suggestions: normalize_map([
                ("features", "feature"),
                ("feat", "feature"),
                ("fix", "hotfix"),
                ("releases", "release"),
            ]),
            banned_names: normalize_set(["wip"]),
            disallowed_names: normalize_set(["master", "develop", "staging"]),
            skip_names: BTreeSet::new(),
            separator: "/".to_string(),
            messages: MessageTemplates::default(),
        }
    }
}

impl Policy {
    /// Build a policy from the defaults with `overrides` applied on top
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptySeparator`] if the resulting separator is empty.
    pub fn from_overrides(overrides: PolicyOverrides) -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(prefixes) = overrides.prefixes {
            policy.allowed_prefixes = normalize_set(prefixes);
        }
        if let Some(suggestions) = overrides.suggestions {
            policy.prefix_suggestions = normalize_map(suggestions);
        }
        if let Some(banned) = overrides.banned {
            policy.banned_names = normalize_set(banned);
        }
        if let Some(disallowed) = overrides.disallowed {
            policy.disallowed_names = normalize_set(disallowed);
        }
        if let Some(skip) = overrides.skip {
            policy.skip_names = normalize_set(skip);
        }
        if let Some(separator) = overrides.separator {
            policy.separator = separator;
        }

        let messages = &mut policy.messages;
        if let Some(msg) = overrides.msg_branch_banned {
            messages.branch_banned = msg;
        }
        if let Some(msg) = overrides.msg_branch_disallowed {
            messages.branch_disallowed = msg;
        }
        if let Some(msg) = overrides.msg_prefix_not_allowed {
            messages.prefix_not_allowed = msg;
        }
        if let Some(msg) = overrides.msg_prefix_suggestion {
            messages.prefix_suggestion = msg;
        }
        if let Some(msg) = overrides.msg_separator_required {
            messages.separator_required = msg;
        }

        if policy.separator.is_empty() {
            return Err(PolicyError::EmptySeparator);
        }

        Ok(policy)
    }

    /// Allowed branch prefixes
    #[must_use]
    pub const fn allowed_prefixes(&self) -> &BTreeSet<String> {
        &self.allowed_prefixes
    }

    /// Prefix suggestions (misspelled -> canonical)
    #[must_use]
    pub const fn prefix_suggestions(&self) -> &BTreeMap<String, String> {
        &self.prefix_suggestions
    }

    /// Branch names that are always rejected
    #[must_use]
    pub const fn banned_names(&self) -> &BTreeSet<String> {
        &self.banned_names
    }

    /// Branch names that must never be the active branch
    #[must_use]
    pub const fn disallowed_names(&self) -> &BTreeSet<String> {
        &self.disallowed_names
    }

    /// Branch names exempt from every check
    #[must_use]
    pub const fn skip_names(&self) -> &BTreeSet<String> {
        &self.skip_names
    }

    /// Required separator between prefix and name
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Message templates
    #[must_use]
    pub const fn messages(&self) -> &MessageTemplates {
        &self.messages
    }
}

impl From<&Policy> for PolicyOverrides {
    /// Fully-populated overrides describing `policy`, suitable for writing a config file
    fn from(policy: &Policy) -> Self {
        Self {
            prefixes: Some(policy.allowed_prefixes.iter().cloned().collect()),
            banned: Some(policy.banned_names.iter().cloned().collect()),
            skip: Some(policy.skip_names.iter().cloned().collect()),
            disallowed: Some(policy.disallowed_names.iter().cloned().collect()),
            separator: Some(policy.separator.clone()),
            msg_branch_banned: Some(policy.messages.branch_banned.clone()),
            msg_branch_disallowed: Some(policy.messages.branch_disallowed.clone()),
            msg_prefix_not_allowed: Some(policy.messages.prefix_not_allowed.clone()),
            msg_prefix_suggestion: Some(policy.messages.prefix_suggestion.clone()),
            msg_separator_required: Some(policy.messages.separator_required.clone()),
            suggestions: Some(policy.prefix_suggestions.clone()),
        }
    }
}

fn normalize_set<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|name| name.as_ref().to_lowercase()).collect()
}

fn normalize_map<I, K, V>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(from, to)| (from.as_ref().to_lowercase(), to.as_ref().to_lowercase()))
        .collect()
}
