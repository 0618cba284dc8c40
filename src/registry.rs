//! Registrable-suffix lookup.

use crate::builder::{build_tables, RuleList};
use crate::hostname::{skip_leading_dots, Label, Labels};
use crate::label::{is_exception, is_searchable, normalize};
use crate::tables::{Children, RegistryTables};
use crate::{Error, Result};

/// How a hostname with no matching rule is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Only rules in the tables count.
    #[default]
    KnownOnly,
    /// A rightmost label absent from the top level of the tables is treated
    /// as an unknown registry.
    AllowUnknown,
}

/// Outcome of walking a hostname through the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// Offset where the longest matching registry starts.
    Matched(usize),
    NoMatch,
    /// The hostname holds a label that can never match.
    Invalid,
}

/// A handle to one set of registry tables.
///
/// Lookups are pure reads, so a registry can be shared across threads
/// freely.
///
/// # Examples
///
/// ```
/// use domain_registry::DomainRegistry;
///
/// let registry = DomainRegistry::from_rules("com\nco.uk\n").unwrap();
/// assert_eq!(registry.registry_length("www.google.com"), 3);
/// assert_eq!(registry.registry_length("a.b.co.uk"), 5);
/// assert_eq!(registry.registry_length("co.uk"), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    tables: RegistryTables,
}

impl DomainRegistry {
    pub fn new(tables: RegistryTables) -> Self {
        Self { tables }
    }

    /// A registry over the compiled-in tables.
    pub fn builtin() -> Result<Self> {
        RegistryTables::builtin().map(Self::new)
    }

    /// Compile a publicsuffix.org rule list into a registry.
    pub fn from_rules(text: &str) -> Result<Self> {
        let rules = RuleList::parse(text)?;
        build_tables(&rules).map(Self::new)
    }

    pub fn tables(&self) -> &RegistryTables {
        &self.tables
    }

    /// Length in bytes of the registrable suffix of `hostname`, or 0.
    ///
    /// Returns 0 for hostnames with no matching rule, hostnames that are
    /// themselves a registry, and malformed hostnames.
    pub fn registry_length(&self, hostname: impl AsRef<[u8]>) -> usize {
        self.length_or_zero(hostname.as_ref(), LookupMode::KnownOnly)
    }

    /// Like [`registry_length`](Self::registry_length), but a hostname whose
    /// rightmost label is unknown to the tables gets that label as its
    /// registry.
    pub fn registry_length_allow_unknown(&self, hostname: impl AsRef<[u8]>) -> usize {
        self.length_or_zero(hostname.as_ref(), LookupMode::AllowUnknown)
    }

    fn length_or_zero(&self, hostname: &[u8], mode: LookupMode) -> usize {
        match self.lookup(hostname, mode) {
            Ok(len) => len,
            Err(e) => {
                log::error!("Registry lookup failed: {}", e);
                0
            }
        }
    }

    /// Checked lookup. Malformed hostnames still give `Ok(0)`; an error
    /// means the tables produced an impossible boundary.
    pub fn lookup(&self, hostname: impl AsRef<[u8]>, mode: LookupMode) -> Result<usize> {
        let host = normalize(hostname.as_ref());
        let start = skip_leading_dots(&host);
        let end = host.len();

        let boundary = match self.walk(&host, start) {
            Walk::Matched(boundary) => boundary,
            Walk::Invalid => return Ok(0),
            Walk::NoMatch => match mode {
                LookupMode::AllowUnknown => match self.unknown_registry(&host, start) {
                    Some(boundary) => boundary,
                    None => return Ok(0),
                },
                LookupMode::KnownOnly => return Ok(0),
            },
        };

        if boundary == start {
            return Ok(0);
        }
        if boundary < start || boundary >= end {
            return Err(Error::BoundaryOutOfRange {
                boundary,
                start,
                end,
            });
        }

        let len = end - boundary;
        if len >= end - start {
            return Ok(0);
        }
        Ok(len)
    }

    fn walk(&self, host: &[u8], start: usize) -> Walk {
        let tables = &self.tables;
        let mut labels = Labels::new(host, start);
        let mut run = tables.root();
        let mut best = None;

        while let Some(label) = labels.next() {
            if !is_searchable(label.text) {
                return Walk::Invalid;
            }
            let Some(node) = tables.find_node(run, label.text) else {
                break;
            };
            // Only a rule ending exactly here counts; a path through a
            // non-terminal node drops the shorter match.
            best = node
                .is_terminal
                .then(|| boundary(tables.label(node.label_offset), &label));

            match tables.children(node) {
                Children::None => break,
                Children::Nodes(children) => run = children,
                Children::Leaves(leaves) => {
                    let Some(next) = labels.next() else {
                        break;
                    };
                    if !is_searchable(next.text) {
                        return Walk::Invalid;
                    }
                    if let Some(stored) = tables.find_leaf(leaves, next.text) {
                        return Walk::Matched(boundary(stored, &next));
                    }
                    break;
                }
            }
        }

        best.map_or(Walk::NoMatch, Walk::Matched)
    }

    /// Start of the rightmost label, if the top level of the tables has
    /// nothing for it.
    fn unknown_registry(&self, host: &[u8], start: usize) -> Option<usize> {
        let label = Labels::new(host, start).next()?;
        if !is_searchable(label.text) {
            return None;
        }
        match self.tables.find_node(self.tables.root(), label.text) {
            Some(_) => None,
            None => Some(label.start),
        }
    }
}

/// Registry boundary for a match of `label` against the stored label
/// `stored`. An exception moves the boundary one label to the right.
fn boundary(stored: &[u8], label: &Label<'_>) -> usize {
    if is_exception(stored) {
        label.end() + 1
    } else {
        label.start
    }
}
