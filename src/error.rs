//! Error types for domain-registry.

use thiserror::Error;

/// Error type for domain-registry operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid binary file magic bytes
    #[error("invalid magic bytes: expected DOMREG header")]
    InvalidMagic,

    /// Unsupported binary format version
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// Checksum mismatch
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Invalid header size
    #[error("invalid header size: expected {expected}, got {actual}")]
    InvalidHeaderSize { expected: usize, actual: usize },

    /// A section of a table file runs past the end of the data
    #[error("truncated {section} section: need {needed} bytes, have {available}")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid rule in a rule list
    #[error("invalid rule on line {line}: {rule:?}: {reason}")]
    InvalidRule {
        line: usize,
        rule: String,
        reason: &'static str,
    },

    /// A label offset does not point at a NUL-terminated label
    #[error("label offset {offset} is outside the string table or unterminated")]
    BadLabelOffset { offset: u32 },

    /// A stored label uses `*` without being exactly the wildcard label
    #[error("label at offset {offset} contains '*' but is not the wildcard label")]
    PartialWildcard { offset: u32 },

    /// The root sibling run is larger than the node table
    #[error("root child count {root_child_count} exceeds node table size {node_count}")]
    RootCountOutOfRange {
        root_child_count: usize,
        node_count: usize,
    },

    /// The leaf table base overlaps the node table
    #[error("leaf table base {leaf_base} is below node table size {node_count}")]
    LeafBaseOverlap { leaf_base: usize, node_count: usize },

    /// A child run lies outside its table or before its parent
    #[error("node {node} has an invalid child run")]
    BadChildRun { node: usize },

    /// A sibling run is not sorted under the label ordering
    #[error("children of node {parent:?} are not strictly sorted (None is the root run)")]
    UnsortedSiblings { parent: Option<usize> },

    /// A computed registry boundary falls outside the hostname
    #[error("registry boundary {boundary} outside hostname bounds [{start}, {end})")]
    BoundaryOutOfRange {
        boundary: usize,
        start: usize,
        end: usize,
    },
}

/// Result type alias for domain-registry operations.
pub type Result<T> = std::result::Result<T, Error>;
