//! In-memory label trie, keyed right to left.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::rules::Rule;
use crate::label::compare_labels;

/// A label ordered the way sibling runs are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SiblingKey(pub String);

impl Ord for SiblingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_labels(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl PartialOrd for SiblingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct RuleTrie {
    pub children: BTreeMap<SiblingKey, RuleTrie>,
    pub is_terminal: bool,
}

impl RuleTrie {
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Self {
        let mut trie = Self::default();
        for rule in rules {
            trie.insert(rule);
        }
        trie
    }

    pub fn insert(&mut self, rule: &Rule) {
        let mut node = self;
        for label in rule.labels().iter().rev() {
            node = node.children.entry(SiblingKey(label.clone())).or_default();
        }
        node.is_terminal = true;
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether every child is childless, so the run can go to the leaf
    /// table. A node without children does not qualify.
    pub fn has_only_leaf_children(&self) -> bool {
        self.has_children() && self.children.values().all(|c| !c.has_children())
    }

    /// Every label in the trie, with repeats.
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    fn collect_labels<'t>(&'t self, out: &mut Vec<&'t str>) {
        for (key, child) in &self.children {
            out.push(key.0.as_str());
            child.collect_labels(out);
        }
    }
}
