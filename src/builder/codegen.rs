//! Rust source generation for compiled-in tables.

use std::fmt::Write;

use crate::tables::{Children, RegistryTables, TrieNode};

/// Render `tables` as the Rust module backing `RegistryTables::builtin`.
pub fn rust_source(tables: &RegistryTables) -> String {
    let (node_names, leaf_names) = entry_names(tables);
    let mut out = String::new();

    out.push_str("// Generated by `registry-gen rust`. Do not edit.\n\n");
    out.push_str("use super::{StringOffset, TrieNode};\n\n");

    let _ = writeln!(out, "// {} bytes", tables.strings().len());
    out.push_str("pub(super) static STRING_TABLE: &[u8] = b\"\\\n");
    for label in tables.strings().split_inclusive(|&b| b == 0) {
        for &b in label {
            push_escaped(&mut out, b);
        }
        out.push_str("\\\n");
    }
    out.push_str("\";\n\n");

    let _ = writeln!(out, "// {} nodes", tables.nodes().len());
    out.push_str("pub(super) static NODE_TABLE: &[TrieNode] = &[\n");
    for (node, name) in tables.nodes().iter().zip(&node_names) {
        let _ = writeln!(
            out,
            "    TrieNode::new({}, {}, {}, {}), // {}",
            node.label_offset, node.first_child, node.child_count, node.is_terminal, name
        );
    }
    out.push_str("];\n\n");

    let _ = writeln!(out, "// {} leaves", tables.leaves().len());
    out.push_str("pub(super) static LEAF_NODE_TABLE: &[StringOffset] = &[\n");
    for (offset, name) in tables.leaves().iter().zip(&leaf_names) {
        let _ = writeln!(out, "    {}, // {}", offset, name);
    }
    out.push_str("];\n\n");

    let _ = writeln!(
        out,
        "pub(super) const ROOT_CHILD_COUNT: usize = {};",
        tables.root_child_count()
    );
    let _ = writeln!(
        out,
        "pub(super) const LEAF_NODE_TABLE_BASE: usize = {};",
        tables.leaf_base()
    );
    out
}

fn push_escaped(out: &mut String, b: u8) {
    match b {
        0 => out.push_str("\\0"),
        b'"' => out.push_str("\\\""),
        b'\\' => out.push_str("\\\\"),
        0x21..=0x7e => out.push(b as char),
        _ => {
            let _ = write!(out, "\\x{:02x}", b);
        }
    }
}

/// Full dotted name of every node and leaf entry. Shared leaf runs keep the
/// name of their first owner.
fn entry_names(tables: &RegistryTables) -> (Vec<String>, Vec<String>) {
    let mut nodes = vec![String::new(); tables.nodes().len()];
    let mut leaves = vec![String::new(); tables.leaves().len()];
    name_run(tables, tables.root(), 0, "", &mut nodes, &mut leaves);
    (nodes, leaves)
}

fn name_run(
    tables: &RegistryTables,
    run: &[TrieNode],
    run_start: usize,
    suffix: &str,
    nodes: &mut [String],
    leaves: &mut [String],
) {
    for (i, node) in run.iter().enumerate() {
        let name = dotted(tables.label(node.label_offset), suffix);
        match tables.children(node) {
            Children::None => {}
            Children::Nodes(children) => {
                let start = node.first_child as usize;
                name_run(tables, children, start, &name, nodes, leaves);
            }
            Children::Leaves(children) => {
                let start = node.first_child as usize - tables.leaf_base();
                for (j, &offset) in children.iter().enumerate() {
                    if let Some(slot) = leaves.get_mut(start + j) {
                        if slot.is_empty() {
                            *slot = dotted(tables.label(offset), &name);
                        }
                    }
                }
            }
        }
        if let Some(slot) = nodes.get_mut(run_start + i) {
            *slot = name;
        }
    }
}

fn dotted(label: &[u8], suffix: &str) -> String {
    let label = String::from_utf8_lossy(label);
    if suffix.is_empty() {
        label.into_owned()
    } else {
        format!("{}.{}", label, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_tables, RuleList};
    use crate::tables::fixtures::simple_tables;

    #[test]
    fn test_rust_source() {
        let source = rust_source(&simple_tables());

        assert!(source.starts_with("// Generated by `registry-gen rust`."));
        assert!(source.contains("b\"\\\ncom\\0\\\nfoo\\0\\\n*\\0\\\n!baz\\0\\\nbar\\0\\\n\";"));
        assert!(source.contains("    TrieNode::new(0, 5, 1, false), // com\n"));
        assert!(source.contains("    TrieNode::new(8, 6, 3, true), // *.foo\n"));
        assert!(source.contains("    10, // !baz.*.foo\n"));
        assert!(source.contains("    8, // *.bar.foo\n"));
        assert!(source.contains("pub(super) const ROOT_CHILD_COUNT: usize = 2;"));
        assert!(source.contains("pub(super) const LEAF_NODE_TABLE_BASE: usize = 5;"));
    }

    #[test]
    fn test_builtin_tables_are_up_to_date() {
        let mut rules = RuleList::parse(include_str!("../../data/effective_tld_names.dat")).unwrap();
        rules.synthesize_wildcard_parents();
        let tables = build_tables(&rules).unwrap();

        // Regenerate with `registry-gen rust -i data/effective_tld_names.dat`.
        assert_eq!(rust_source(&tables), include_str!("../tables/builtin.rs"));
    }

    #[test]
    fn test_escaping() {
        let mut out = String::new();
        for &b in b"a-1\"\\\x7f\0" {
            push_escaped(&mut out, b);
        }
        assert_eq!(out, "a-1\\\"\\\\\\x7f\\0");
    }
}
