//! Expected-result entries derived from a rule list.

use super::rules::{Rule, RuleList};

/// A hostname and the registry length a lookup must return for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub hostname: String,
    pub registry_len: usize,
    /// Whether the entry comes from an exception rule.
    pub is_exception: bool,
}

impl TestEntry {
    fn new(host: &str, registry: String, is_exception: bool) -> Self {
        Self {
            hostname: format!("{}.{}", host, registry),
            registry_len: registry.len(),
            is_exception,
        }
    }

    /// The registry part of the hostname.
    pub fn registry(&self) -> &str {
        &self.hostname[self.hostname.len() - self.registry_len..]
    }
}

/// One entry per rule: `example.<rule>` for plain rules, `example.wildcard.<parent>`
/// and `example.wc.<parent>` for wildcard rules, and `<label>.<parent>` with
/// registry `<parent>` for `!label.<parent>` exception rules.
pub fn test_entries(rules: &RuleList) -> Vec<TestEntry> {
    let mut entries = Vec::with_capacity(rules.len());
    for rule in rules {
        push_entries(rule, &mut entries);
    }
    entries
}

fn push_entries(rule: &Rule, entries: &mut Vec<TestEntry>) {
    let labels = rule.labels();
    let parent = labels[1..].join(".");

    if rule.is_wildcard() {
        // Two lengths, so nothing depends on the wildcard label's size.
        for sub in ["wildcard", "wc"] {
            let registry = if parent.is_empty() {
                sub.to_string()
            } else {
                format!("{}.{}", sub, parent)
            };
            entries.push(TestEntry::new("example", registry, false));
        }
    } else if rule.is_exception() {
        entries.push(TestEntry::new(&labels[0][1..], parent, true));
    } else {
        entries.push(TestEntry::new("example", rule.to_string(), false));
    }
}
