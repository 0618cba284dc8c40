//! Tests for the process-wide registry.
//!
//! Everything runs in one test so the steps cannot interleave.

use domain_registry::{
    initialize, install_registry, install_tables, is_initialized, registry,
    registry_suffix_length, registry_suffix_length_allow_unknown, reset_registry, DomainRegistry,
    TrieNode,
};

#[test]
fn test_global_registry_lifecycle() {
    assert!(!is_initialized());
    assert!(registry().is_none());

    initialize();
    assert!(is_initialized());
    assert_eq!(registry_suffix_length("www.google.com"), 3);
    assert_eq!(registry_suffix_length("a.b.co.uk"), 5);
    assert_eq!(registry_suffix_length("foo.bar"), 0);
    assert_eq!(registry_suffix_length_allow_unknown("foo.bar"), 3);

    // A second initialize keeps the installed registry.
    let before = registry().unwrap();
    initialize();
    assert!(std::sync::Arc::ptr_eq(&before, &registry().unwrap()));

    // Replace with a registry that only knows "bar".
    install_registry(DomainRegistry::from_rules("bar\n").unwrap());
    assert_eq!(registry_suffix_length("foo.bar"), 3);
    assert_eq!(registry_suffix_length("www.google.com"), 0);

    // Raw tables: "com" with a wildcard child.
    install_tables(
        b"com\0*\0".to_vec(),
        vec![TrieNode::new(0, 1, 1, true), TrieNode::new(4, 0, 0, true)],
        Vec::<u32>::new(),
        1,
        2,
    )
    .unwrap();
    assert_eq!(registry_suffix_length("a.b.com"), 5);

    // Invalid tables leave the current registry in place.
    assert!(install_tables(
        b"com\0".to_vec(),
        vec![TrieNode::new(99, 0, 0, true)],
        Vec::<u32>::new(),
        1,
        1,
    )
    .is_err());
    assert_eq!(registry_suffix_length("a.b.com"), 5);

    reset_registry();
    assert!(!is_initialized());

    initialize();
    assert_eq!(registry_suffix_length("www.google.com"), 3);
}
