//! domain-registry - registrable-suffix lookup over a compact effective-TLD trie.
//!
//! For a hostname, this crate computes the length in bytes of its
//! *registrable suffix*: the tail controlled by a domain registry, such as
//! `com` or `co.uk`. A hostname needs at least one label in front of its
//! registry to get a non-zero answer.
//!
//! # Features
//!
//! - **Wildcard and exception rules**: `*.kobe.jp` and `!city.kobe.jp`
//! - **Edge cases**: leading, trailing and repeated dots, ASCII case folding
//! - **Unknown registries**: optional fallback to the rightmost label
//! - **Compact tables**: suffix-shared string table, node and leaf tables
//! - **Rule compiler**: build tables from a publicsuffix.org rule list
//! - **Binary table files**: versioned, checksummed, memory-mapped loading
//!
//! # Quick Start
//!
//! ```
//! use domain_registry::{initialize, registry_suffix_length, registry_suffix_length_allow_unknown};
//!
//! initialize();
//! assert_eq!(registry_suffix_length("www.google.com"), 3);
//! assert_eq!(registry_suffix_length("WWW.gOoGlE.cOm"), 3);
//! assert_eq!(registry_suffix_length("google.com."), 4);
//! assert_eq!(registry_suffix_length("co.uk"), 0);
//! assert_eq!(registry_suffix_length_allow_unknown("foo.bar"), 3);
//! ```
//!
//! # Explicit Handles
//!
//! The global functions go through one process-wide [`DomainRegistry`].
//! Code that wants its own tables builds a handle directly:
//!
//! ```
//! use domain_registry::{DomainRegistry, LookupMode};
//!
//! let registry = DomainRegistry::from_rules("jp\n*.kobe.jp\n!city.kobe.jp\n").unwrap();
//! assert_eq!(registry.registry_length("www.example.kobe.jp"), 15);
//! assert_eq!(registry.registry_length("www.city.kobe.jp"), 7);
//! assert_eq!(registry.lookup("foo.bar", LookupMode::AllowUnknown).unwrap(), 3);
//! ```
//!
//! # Matching
//!
//! Labels are matched right to left. At each level the literal label wins,
//! then its exception form, then the wildcard. The last terminal rule seen
//! gives the registry; an exception rule puts the registry one label to
//! the right of the label it names.

mod error;
mod global;
mod registry;

pub mod binary;
pub mod builder;
pub mod hostname;
pub mod label;
pub mod tables;

// Re-export core types
pub use error::{Error, Result};
pub use registry::{DomainRegistry, LookupMode};
pub use tables::{Children, RegistryTables, StringOffset, TrieNode};

// Re-export global API functions
pub use global::{
    initialize, install_registry, install_tables, is_initialized, registry,
    registry_suffix_length, registry_suffix_length_allow_unknown, reset_registry,
};
