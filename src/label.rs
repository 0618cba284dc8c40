//! Label helpers: case folding and the sibling ordering used by the tables.

use std::cmp::Ordering;
use std::iter;

/// Label separator.
pub const SEPARATOR: u8 = b'.';

/// Marker for a wildcard label (`*`).
pub const WILDCARD: u8 = b'*';

/// Marker prefix for an exception label (`!foo`).
pub const EXCEPTION: u8 = b'!';

/// Return an ASCII-lower-cased copy of `hostname`.
///
/// Only `A`-`Z` are folded; every other byte, including non-ASCII and
/// invalid UTF-8, is copied unchanged.
pub fn normalize(hostname: &[u8]) -> Vec<u8> {
    hostname.to_ascii_lowercase()
}

/// Whether a stored label is the wildcard label.
#[inline]
pub fn is_wildcard(label: &[u8]) -> bool {
    label == [WILDCARD]
}

/// Whether a stored label is an exception label.
#[inline]
pub fn is_exception(label: &[u8]) -> bool {
    label.first() == Some(&EXCEPTION)
}

/// Whether a hostname label may be looked up at all.
///
/// Empty labels and labels carrying a rule marker never appear in a valid
/// hostname and never match a stored label.
#[inline]
pub fn is_searchable(label: &[u8]) -> bool {
    !label.is_empty() && label[0] != WILDCARD && !is_exception(label)
}

/// Compare two labels in sibling order.
///
/// Byte order, except that the wildcard sorts after every label that does
/// not share its first byte. Wildcards are always alone in their label, so
/// this puts `*` last in any sibling run.
pub fn compare_labels(a: &[u8], b: &[u8]) -> Ordering {
    match (a.first(), b.first()) {
        (Some(x), Some(y)) if x != y => {
            if *x == WILDCARD {
                Ordering::Greater
            } else if *y == WILDCARD {
                Ordering::Less
            } else {
                x.cmp(y)
            }
        }
        _ => a.cmp(b),
    }
}

/// Compare a stored label against the exception form (`!` + `label`) of a
/// hostname label, without building the prefixed key.
pub fn compare_exception(stored: &[u8], label: &[u8]) -> Ordering {
    if is_wildcard(stored) {
        return Ordering::Greater;
    }
    stored
        .iter()
        .cmp(iter::once(&EXCEPTION).chain(label.iter()))
}
