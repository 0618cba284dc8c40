//! Sibling-run search.
//!
//! A hostname label matches a sibling run in this order: the literal label,
//! then its exception form (`!label`), then the wildcard, which always sorts
//! last in its run.

use super::{RegistryTables, StringOffset, TrieNode};
use crate::label::{compare_exception, compare_labels, is_searchable, is_wildcard};

impl RegistryTables {
    /// Find the node in `run` matching the hostname label `label`.
    pub fn find_node<'t>(&'t self, run: &'t [TrieNode], label: &[u8]) -> Option<&'t TrieNode> {
        let idx = self.find_in_run(run, |node| self.label(node.label_offset), label)?;
        run.get(idx)
    }

    /// Find the leaf in `run` matching the hostname label `label`,
    /// returning the stored label (which may be `*` or `!label`).
    pub fn find_leaf<'t>(&'t self, run: &[StringOffset], label: &[u8]) -> Option<&'t [u8]> {
        let idx = self.find_in_run(run, |&offset| self.label(offset), label)?;
        run.get(idx).map(|&offset| self.label(offset))
    }

    fn find_in_run<'t, T, F>(&'t self, run: &[T], label_of: F, label: &[u8]) -> Option<usize>
    where
        F: Fn(&T) -> &'t [u8],
    {
        if !is_searchable(label) {
            return None;
        }

        if let Ok(idx) = run.binary_search_by(|entry| compare_labels(label_of(entry), label)) {
            return Some(idx);
        }

        if let Ok(idx) = run.binary_search_by(|entry| compare_exception(label_of(entry), label)) {
            return Some(idx);
        }

        match run.last() {
            Some(last) if is_wildcard(label_of(last)) => Some(run.len() - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::super::Children;
    use super::*;

    fn leaves_of(tables: &RegistryTables, node: &TrieNode) -> Vec<StringOffset> {
        match tables.children(node) {
            Children::Leaves(run) => run.to_vec(),
            other => panic!("expected leaf children, got {:?}", other),
        }
    }

    #[test]
    fn test_find_root_node() {
        let tables = simple_tables();
        let root = tables.root();
        assert_eq!(tables.find_node(root, b""), None);
        assert_eq!(tables.find_node(root, b"com"), Some(&NODES[0]));
        assert_eq!(tables.find_node(root, b"foo"), Some(&NODES[1]));
        assert_eq!(tables.find_node(root, b"co"), None);
        assert_eq!(tables.find_node(root, b"comm"), None);
        assert_eq!(tables.find_node(root, b"zzz"), None);
    }

    #[test]
    fn test_find_child_node() {
        let tables = simple_tables();
        let run = &NODES[2..5];
        assert_eq!(tables.find_node(run, b"baz"), Some(&NODES[2]));
        assert_eq!(tables.find_node(run, b"bar"), Some(&NODES[3]));
        assert_eq!(tables.find_node(run, b"zzz"), Some(&NODES[4]));
        assert_eq!(tables.find_node(run, b"wildcard"), Some(&NODES[4]));
        assert_eq!(tables.find_node(run, b"wc"), Some(&NODES[4]));
    }

    #[test]
    fn test_markers_never_match() {
        let tables = simple_tables();
        let run = &NODES[2..5];
        assert_eq!(tables.find_node(run, b"!baz"), None);
        assert_eq!(tables.find_node(run, b"*"), None);
        assert_eq!(tables.find_node(run, b""), None);
    }

    #[test]
    fn test_find_leaf() {
        let tables = simple_tables();

        let com_leaves = leaves_of(&tables, &NODES[0]);
        assert_eq!(tables.find_leaf(&com_leaves, b""), None);
        assert_eq!(tables.find_leaf(&com_leaves, b"foo"), Some(&b"foo"[..]));
        assert_eq!(tables.find_leaf(&com_leaves, b"bar"), None);

        let bar_leaves = leaves_of(&tables, &NODES[3]);
        assert_eq!(tables.find_leaf(&bar_leaves, b"foo"), Some(&b"foo"[..]));
        assert_eq!(tables.find_leaf(&bar_leaves, b"zzz"), Some(&b"*"[..]));

        let star_leaves = leaves_of(&tables, &NODES[4]);
        assert_eq!(tables.find_leaf(&star_leaves, b"baz"), Some(&b"!baz"[..]));
        assert_eq!(tables.find_leaf(&star_leaves, b"foo"), Some(&b"foo"[..]));
        assert_eq!(tables.find_leaf(&star_leaves, b"zzz"), Some(&b"*"[..]));
        assert_eq!(tables.find_leaf(&star_leaves, b"wildcard"), Some(&b"*"[..]));
        assert_eq!(tables.find_leaf(&star_leaves, b"wc"), Some(&b"*"[..]));
        assert_eq!(tables.find_leaf(&star_leaves, b"!baz"), None);
        assert_eq!(tables.find_leaf(&star_leaves, b"*"), None);
        assert_eq!(tables.find_leaf(&star_leaves, b""), None);
    }

    #[test]
    fn test_find_leaf_exact_bounds() {
        let tables = simple_tables();
        let run = [10u32];
        assert_eq!(tables.find_leaf(&run, b"baz"), Some(&b"!baz"[..]));
        assert_eq!(tables.find_leaf(&run, b"ba"), None);
        assert_eq!(tables.find_leaf(&run, b"bazz"), None);
        assert_eq!(tables.find_leaf(&run, b"foo"), None);
    }
}
