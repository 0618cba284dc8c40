//! Compact trie tables for effective-TLD rules.
//!
//! A rule set is stored in three flat tables:
//!
//! ```text
//! STRING TABLE   "com\0foo\0*\0!baz\0bar\0"     NUL-terminated labels
//! NODE TABLE     [TrieNode; n]                  root run first, then child runs
//! LEAF TABLE     [u32; m]                       label offsets of childless terminals
//! ```
//!
//! A node whose `first_child` is at or past `leaf_base` keeps its children
//! in the leaf table, starting at `first_child - leaf_base`.

mod builtin;
mod search;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::Range;

use crate::label::{compare_labels, is_wildcard, WILDCARD};
use crate::{Error, Result};

/// Byte offset of a label in the string table.
pub type StringOffset = u32;

/// A trie node in the node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieNode {
    /// Offset of this node's label in the string table.
    pub label_offset: StringOffset,
    /// Index of the first child in the node table, or `leaf_base` plus the
    /// index of the first child in the leaf table.
    pub first_child: u32,
    /// Number of children.
    pub child_count: u32,
    /// Whether the path from the root to this node is itself a rule.
    pub is_terminal: bool,
}

impl TrieNode {
    pub const fn new(
        label_offset: StringOffset,
        first_child: u32,
        child_count: u32,
        is_terminal: bool,
    ) -> Self {
        Self {
            label_offset,
            first_child,
            child_count,
            is_terminal,
        }
    }
}

/// The children of a trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Children<'t> {
    /// The node has no children.
    None,
    /// A run of full nodes in the node table.
    Nodes(&'t [TrieNode]),
    /// A run of childless terminal labels in the leaf table.
    Leaves(&'t [StringOffset]),
}

/// A validated, immutable set of registry tables.
#[derive(Debug, Clone)]
pub struct RegistryTables {
    strings: Cow<'static, [u8]>,
    nodes: Cow<'static, [TrieNode]>,
    leaves: Cow<'static, [StringOffset]>,
    root_child_count: usize,
    leaf_base: usize,
}

impl RegistryTables {
    /// Build a table set, checking every structural invariant the search
    /// relies on.
    pub fn new(
        strings: impl Into<Cow<'static, [u8]>>,
        nodes: impl Into<Cow<'static, [TrieNode]>>,
        leaves: impl Into<Cow<'static, [StringOffset]>>,
        root_child_count: usize,
        leaf_base: usize,
    ) -> Result<Self> {
        let tables = Self {
            strings: strings.into(),
            nodes: nodes.into(),
            leaves: leaves.into(),
            root_child_count,
            leaf_base,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// The tables generated from the bundled rule list.
    pub fn builtin() -> Result<Self> {
        Self::new(
            builtin::STRING_TABLE,
            builtin::NODE_TABLE,
            builtin::LEAF_NODE_TABLE,
            builtin::ROOT_CHILD_COUNT,
            builtin::LEAF_NODE_TABLE_BASE,
        )
    }

    /// Raw string table bytes.
    pub fn strings(&self) -> &[u8] {
        &self.strings
    }

    /// Raw node table.
    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Raw leaf table.
    pub fn leaves(&self) -> &[StringOffset] {
        &self.leaves
    }

    pub fn root_child_count(&self) -> usize {
        self.root_child_count
    }

    pub fn leaf_base(&self) -> usize {
        self.leaf_base
    }

    /// The sibling run of top-level labels.
    pub fn root(&self) -> &[TrieNode] {
        self.nodes.get(..self.root_child_count).unwrap_or(&[])
    }

    /// The label stored at `offset`, up to its NUL terminator.
    pub fn label(&self, offset: StringOffset) -> &[u8] {
        match self.label_range(offset) {
            Some(range) => &self.strings[range],
            None => &[],
        }
    }

    /// The children of `node`.
    pub fn children(&self, node: &TrieNode) -> Children<'_> {
        match self.child_range(node) {
            None => Children::None,
            Some(ChildRun::Nodes(range)) => {
                self.nodes.get(range).map_or(Children::None, Children::Nodes)
            }
            Some(ChildRun::Leaves(range)) => {
                self.leaves.get(range).map_or(Children::None, Children::Leaves)
            }
        }
    }

    fn label_range(&self, offset: StringOffset) -> Option<Range<usize>> {
        let start = offset as usize;
        let len = self.strings.get(start..)?.iter().position(|&b| b == 0)?;
        Some(start..start + len)
    }

    fn child_range(&self, node: &TrieNode) -> Option<ChildRun> {
        if node.child_count == 0 {
            return None;
        }
        let first = node.first_child as usize;
        let count = node.child_count as usize;
        if first >= self.leaf_base {
            let start = first - self.leaf_base;
            Some(ChildRun::Leaves(start..start + count))
        } else {
            Some(ChildRun::Nodes(first..first + count))
        }
    }

    fn validate(&self) -> Result<()> {
        let node_count = self.nodes.len();
        if self.root_child_count > node_count {
            return Err(Error::RootCountOutOfRange {
                root_child_count: self.root_child_count,
                node_count,
            });
        }
        if self.leaf_base < node_count {
            return Err(Error::LeafBaseOverlap {
                leaf_base: self.leaf_base,
                node_count,
            });
        }

        for &offset in self.nodes.iter().map(|n| &n.label_offset).chain(self.leaves.iter()) {
            match self.label_range(offset) {
                Some(range) if !range.is_empty() => {
                    let label = &self.strings[range];
                    if label.contains(&WILDCARD) && !is_wildcard(label) {
                        return Err(Error::PartialWildcard { offset });
                    }
                }
                _ => return Err(Error::BadLabelOffset { offset }),
            }
        }

        self.check_sorted(self.root().iter().map(|n| n.label_offset), None)?;

        for (idx, node) in self.nodes.iter().enumerate() {
            match self.child_range(node) {
                None => {}
                Some(ChildRun::Nodes(range)) => {
                    if range.start <= idx || range.end > node_count {
                        return Err(Error::BadChildRun { node: idx });
                    }
                    let run = &self.nodes[range];
                    self.check_sorted(run.iter().map(|n| n.label_offset), Some(idx))?;
                }
                Some(ChildRun::Leaves(range)) => {
                    let run = self
                        .leaves
                        .get(range)
                        .ok_or(Error::BadChildRun { node: idx })?;
                    self.check_sorted(run.iter().copied(), Some(idx))?;
                }
            }
        }

        Ok(())
    }

    fn check_sorted(
        &self,
        offsets: impl Iterator<Item = StringOffset>,
        parent: Option<usize>,
    ) -> Result<()> {
        let mut prev: Option<&[u8]> = None;
        for offset in offsets {
            let label = self.label(offset);
            if let Some(prev) = prev {
                if compare_labels(prev, label) != Ordering::Less {
                    return Err(Error::UnsortedSiblings { parent });
                }
            }
            prev = Some(label);
        }
        Ok(())
    }
}

enum ChildRun {
    Nodes(Range<usize>),
    Leaves(Range<usize>),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    //  com: 0
    //  foo: 4
    //    *: 8
    // !baz: 10
    //  bar: 15
    pub const STRINGS: &[u8] = b"com\0foo\0*\0!baz\0bar\0";

    // Rules: foo.com, *.foo, !baz.foo, bar.foo, !baz.*.foo, foo.*.foo,
    // *.*.foo, foo.bar.foo, *.bar.foo
    pub const NODES: &[TrieNode] = &[
        TrieNode::new(0, 5, 1, false),  // com       (1 leaf child at 0)
        TrieNode::new(4, 2, 3, false),  // foo       (3 node children at 2)
        TrieNode::new(10, 0, 0, true),  // !baz.foo
        TrieNode::new(15, 9, 2, true),  // bar.foo   (2 leaf children at 4)
        TrieNode::new(8, 6, 3, true),   // *.foo     (3 leaf children at 1)
    ];

    pub const LEAVES: &[StringOffset] = &[
        4,  // foo.com
        10, // !baz.*.foo
        4,  // foo.*.foo
        8,  // *.*.foo
        4,  // foo.bar.foo
        8,  // *.bar.foo
    ];

    pub const ROOT_CHILD_COUNT: usize = 2;
    pub const LEAF_BASE: usize = 5;

    pub fn simple_tables() -> RegistryTables {
        RegistryTables::new(STRINGS, NODES, LEAVES, ROOT_CHILD_COUNT, LEAF_BASE).unwrap()
    }
}
