//! Round trip through a table file on disk.

use std::io::Write;

use domain_registry::binary::{TableReader, TableWriter, HEADER_SIZE};
use domain_registry::builder::{test_entries, RuleList, TableBuilder};
use domain_registry::{DomainRegistry, Error, LookupMode};
use tempfile::NamedTempFile;

const RULES: &str = include_str!("../data/effective_tld_names.dat");

fn write_table_file(rules: &RuleList) -> NamedTempFile {
    let tables = TableBuilder::new().build(rules).unwrap();
    let data = TableWriter::new().write(&tables).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_table_file_lookups() {
    let rules = RuleList::parse(RULES).unwrap();
    let file = write_table_file(&rules);

    let reader = TableReader::open(file.path()).unwrap();
    assert_eq!(reader.header().node_count as usize, reader.tables().nodes().len());

    let registry = reader.into_registry();
    assert_eq!(registry.registry_length("www.google.com"), 3);
    assert_eq!(registry.registry_length("www.city.kobe.jp"), 7);
    assert_eq!(registry.lookup("foo.bar", LookupMode::AllowUnknown).unwrap(), 3);

    for entry in test_entries(&rules) {
        assert_eq!(
            registry.registry_length(&entry.hostname),
            entry.registry_len,
            "host {:?}",
            entry.hostname
        );
    }
}

#[test]
fn test_table_file_matches_compiled_tables() {
    let rules = RuleList::parse(RULES).unwrap();
    let file = write_table_file(&rules);

    let loaded = TableReader::open(file.path()).unwrap().into_tables();
    let compiled = TableBuilder::new().build(&rules).unwrap();

    assert_eq!(loaded.strings(), compiled.strings());
    assert_eq!(loaded.nodes(), compiled.nodes());
    assert_eq!(loaded.leaves(), compiled.leaves());
    assert_eq!(loaded.root_child_count(), compiled.root_child_count());
    assert_eq!(loaded.leaf_base(), compiled.leaf_base());
}

#[test]
fn test_corrupted_table_file() {
    let rules = RuleList::parse("com\nco.uk\n").unwrap();
    let tables = TableBuilder::new().build(&rules).unwrap();
    let mut data = TableWriter::new().write(&tables).unwrap();
    data[HEADER_SIZE] ^= 0x20;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    assert!(matches!(
        TableReader::open(file.path()),
        Err(Error::ChecksumMismatch)
    ));
}

#[test]
fn test_missing_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");
    assert!(matches!(TableReader::open(&path), Err(Error::Io(_))));

    // The compiled-in tables are unaffected.
    assert_eq!(DomainRegistry::builtin().unwrap().registry_length("a.co.uk"), 5);
}
