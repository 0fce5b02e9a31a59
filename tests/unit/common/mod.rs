//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing branchlint components.

use std::collections::BTreeMap;

use branchlint::adapters::CollectingSink;
use branchlint::{Policy, PolicyOverrides, Verdict, evaluate};

/// Evaluate `branch` and return the verdict plus everything the sink received
pub fn run(branch: &str, policy: &Policy) -> (Verdict, Vec<String>) {
    let mut sink = CollectingSink::new();
    let verdict = evaluate(branch, policy, &mut sink);
    (verdict, sink.into_messages())
}

/// Evaluate `branch` against the default policy
pub fn run_default(branch: &str) -> (Verdict, Vec<String>) {
    run(branch, &Policy::default())
}

/// Builder for test policies
#[derive(Default)]
pub struct PolicyBuilder {
    overrides: PolicyOverrides,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefixes(mut self, prefixes: &[&str]) -> Self {
        self.overrides.prefixes = Some(to_vec(prefixes));
        self
    }

    pub fn banned(mut self, names: &[&str]) -> Self {
        self.overrides.banned = Some(to_vec(names));
        self
    }

    pub fn disallowed(mut self, names: &[&str]) -> Self {
        self.overrides.disallowed = Some(to_vec(names));
        self
    }

    pub fn skip(mut self, names: &[&str]) -> Self {
        self.overrides.skip = Some(to_vec(names));
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.overrides.separator = Some(separator.to_string());
        self
    }

    pub fn suggestions(mut self, pairs: &[(&str, &str)]) -> Self {
        self.overrides.suggestions = Some(
            pairs
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect::<BTreeMap<_, _>>(),
        );
        self
    }

    pub fn build(self) -> Policy {
        Policy::from_overrides(self.overrides).expect("valid test policy")
    }
}

fn to_vec(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}
