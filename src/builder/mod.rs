//! Rule-list compiler.
//!
//! Turns a publicsuffix.org rule list into [`RegistryTables`]:
//!
//! ```text
//! rules.dat --parse--> RuleList --trie--> RuleTrie --layout--> RegistryTables
//!                                                               |
//!                                       binary::TableWriter <---+---> codegen::rust_source
//! ```
//!
//! Node layout puts the root run first. Every other run is appended
//! depth-first when its parent is laid out, so a child run always follows
//! its parent. Runs whose members are all childless go to the leaf table
//! instead, and identical leaf runs are stored once.

pub mod codegen;
mod entries;
mod rules;
mod strings;
mod trie;

pub use entries::{test_entries, TestEntry};
pub use rules::{Rule, RuleList};

use ahash::AHashMap;

use crate::tables::{RegistryTables, StringOffset, TrieNode};
use crate::{Error, Result};
use strings::StringTable;
use trie::RuleTrie;

/// Builds registry tables from a rule list.
#[derive(Debug, Default)]
pub struct TableBuilder {
    nodes: Vec<TrieNode>,
    leaves: Vec<StringOffset>,
    /// Node index and leaf-table start of every leaf run, fixed up once the
    /// node table size is known.
    leaf_links: Vec<(usize, u32)>,
    /// Start of each distinct leaf run, keyed by its labels.
    leaf_runs: AHashMap<Vec<String>, u32>,
}

impl TableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `rules` into validated tables.
    pub fn build(&mut self, rules: &RuleList) -> Result<RegistryTables> {
        self.nodes.clear();
        self.leaves.clear();
        self.leaf_links.clear();
        self.leaf_runs.clear();

        let trie = RuleTrie::from_rules(rules);
        let strings = StringTable::build(trie.labels());

        let root_child_count = trie.children.len();
        self.push_run(&trie, &strings)?;
        self.layout(&trie, 0, &strings)?;

        let leaf_base = self.nodes.len();
        for &(idx, start) in &self.leaf_links {
            self.nodes[idx].first_child = leaf_base as u32 + start;
        }

        log::debug!(
            "Built registry tables: {} rules, {} string bytes, {} nodes, {} leaves",
            rules.len(),
            strings.len(),
            self.nodes.len(),
            self.leaves.len()
        );

        RegistryTables::new(
            strings.into_bytes(),
            std::mem::take(&mut self.nodes),
            std::mem::take(&mut self.leaves),
            root_child_count,
            leaf_base,
        )
    }

    /// Lay out the children of every node in the run at `run_start`, which
    /// holds the children of `parent`.
    fn layout(&mut self, parent: &RuleTrie, run_start: usize, strings: &StringTable) -> Result<()> {
        for (i, child) in parent.children.values().enumerate() {
            let idx = run_start + i;
            if !child.has_children() {
                continue;
            }

            let count = child.children.len() as u32;
            if child.has_only_leaf_children() {
                let start = self.push_leaf_run(child, strings)?;
                self.leaf_links.push((idx, start));
                self.nodes[idx].child_count = count;
            } else {
                let start = self.nodes.len();
                self.push_run(child, strings)?;
                self.nodes[idx].first_child = start as u32;
                self.nodes[idx].child_count = count;
                self.layout(child, start, strings)?;
            }
        }
        Ok(())
    }

    /// Append the children of `parent` to the node table, unlinked.
    fn push_run(&mut self, parent: &RuleTrie, strings: &StringTable) -> Result<()> {
        for (key, child) in &parent.children {
            let offset = label_offset(strings, &key.0)?;
            self.nodes.push(TrieNode::new(offset, 0, 0, child.is_terminal));
        }
        Ok(())
    }

    fn push_leaf_run(&mut self, parent: &RuleTrie, strings: &StringTable) -> Result<u32> {
        let labels: Vec<String> = parent.children.keys().map(|k| k.0.clone()).collect();
        if let Some(&start) = self.leaf_runs.get(&labels) {
            return Ok(start);
        }

        let start = self.leaves.len() as u32;
        for label in &labels {
            let offset = label_offset(strings, label)?;
            self.leaves.push(offset);
        }
        self.leaf_runs.insert(labels, start);
        Ok(start)
    }
}

fn label_offset(strings: &StringTable, label: &str) -> Result<StringOffset> {
    strings.offset(label).ok_or_else(|| Error::InvalidRule {
        line: 0,
        rule: label.to_string(),
        reason: "label missing from string table",
    })
}

/// Compile `rules` with a fresh [`TableBuilder`].
pub fn build_tables(rules: &RuleList) -> Result<RegistryTables> {
    TableBuilder::new().build(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Children;

    const SIMPLE_RULES: &str = "\
foo.com
*.foo
!baz.foo
bar.foo
!baz.*.foo
foo.*.foo
*.*.foo
foo.bar.foo
*.bar.foo
";

    #[test]
    fn test_build_simple_tables() {
        let rules = RuleList::parse(SIMPLE_RULES).unwrap();
        let tables = build_tables(&rules).unwrap();

        assert_eq!(tables.root_child_count(), 2);
        assert_eq!(tables.leaf_base(), tables.nodes().len());

        let root = tables.root();
        assert_eq!(tables.label(root[0].label_offset), b"com");
        assert_eq!(tables.label(root[1].label_offset), b"foo");
        assert!(!root[0].is_terminal);
        assert!(!root[1].is_terminal);

        // com has a single leaf child.
        match tables.children(&root[0]) {
            Children::Leaves(run) => {
                let labels: Vec<&[u8]> = run.iter().map(|&o| tables.label(o)).collect();
                assert_eq!(labels, vec![&b"foo"[..]]);
            }
            other => panic!("expected leaves, got {:?}", other),
        }

        // foo keeps its children in the node table, wildcard last.
        match tables.children(&root[1]) {
            Children::Nodes(run) => {
                let labels: Vec<&[u8]> = run.iter().map(|n| tables.label(n.label_offset)).collect();
                assert_eq!(labels, vec![&b"!baz"[..], &b"bar"[..], &b"*"[..]]);
                assert!(run.iter().all(|n| n.is_terminal));
            }
            other => panic!("expected nodes, got {:?}", other),
        }
    }

    #[test]
    fn test_child_runs_follow_parent() {
        let rules = RuleList::parse("a.b.c.d\nx.c.d\nd\ny.e.d\n").unwrap();
        let tables = build_tables(&rules).unwrap();
        for (idx, node) in tables.nodes().iter().enumerate() {
            if node.child_count > 0 && (node.first_child as usize) < tables.leaf_base() {
                assert!(node.first_child as usize > idx);
            }
        }
    }

    #[test]
    fn test_identical_leaf_runs_are_shared() {
        let rules = RuleList::parse("co.uk\nac.uk\nco.jp\nac.jp\n").unwrap();
        let tables = build_tables(&rules).unwrap();
        assert_eq!(tables.leaves().len(), 2);

        let root = tables.root();
        assert_eq!(root[0].first_child, root[1].first_child);
        assert_eq!(root[0].child_count, 2);
    }

    #[test]
    fn test_empty_rule_list() {
        let tables = build_tables(&RuleList::new()).unwrap();
        assert!(tables.root().is_empty());
        assert!(tables.strings().is_empty());
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = TableBuilder::new();
        let first = builder.build(&RuleList::parse("com\nnet\n").unwrap()).unwrap();
        let second = builder.build(&RuleList::parse("org\n").unwrap()).unwrap();
        assert_eq!(first.root().len(), 2);
        assert_eq!(second.root().len(), 1);
        assert_eq!(second.label(second.root()[0].label_offset), b"org");
    }
}
