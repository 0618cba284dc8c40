//! Process-wide registry and the top-level lookup API.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Result;
use crate::registry::DomainRegistry;
use crate::tables::{RegistryTables, StringOffset, TrieNode};

/// Global registry
static GLOBAL_REGISTRY: Lazy<RwLock<Option<Arc<DomainRegistry>>>> =
    Lazy::new(|| RwLock::new(None));

/// Install the compiled-in tables as the global registry.
///
/// Calling this again once a registry is installed does nothing, so it is
/// safe to call from every entry point.
///
/// # Panics
///
/// Panics if the compiled-in tables fail validation.
pub fn initialize() {
    if is_initialized() {
        return;
    }

    let mut guard = GLOBAL_REGISTRY.write();
    if guard.is_none() {
        let registry = DomainRegistry::builtin()
            .unwrap_or_else(|e| panic!("compiled-in registry tables are invalid: {}", e));
        *guard = Some(Arc::new(registry));
        log::debug!("Installed compiled-in registry tables");
    }
}

/// Check if a global registry is installed.
pub fn is_initialized() -> bool {
    GLOBAL_REGISTRY.read().is_some()
}

/// Replace the global registry.
pub fn install_registry(registry: DomainRegistry) {
    let tables = registry.tables();
    log::debug!(
        "Installing registry: {} nodes, {} leaves",
        tables.nodes().len(),
        tables.leaves().len()
    );
    *GLOBAL_REGISTRY.write() = Some(Arc::new(registry));
}

/// Validate a raw table bundle and install it as the global registry.
pub fn install_tables(
    strings: impl Into<Cow<'static, [u8]>>,
    nodes: impl Into<Cow<'static, [TrieNode]>>,
    leaves: impl Into<Cow<'static, [StringOffset]>>,
    root_child_count: usize,
    leaf_base: usize,
) -> Result<()> {
    let tables = RegistryTables::new(strings, nodes, leaves, root_child_count, leaf_base)?;
    install_registry(DomainRegistry::new(tables));
    Ok(())
}

/// Uninstall the global registry.
pub fn reset_registry() {
    *GLOBAL_REGISTRY.write() = None;
}

/// The installed global registry, if any.
pub fn registry() -> Option<Arc<DomainRegistry>> {
    GLOBAL_REGISTRY.read().clone()
}

fn installed() -> Arc<DomainRegistry> {
    match registry() {
        Some(registry) => registry,
        None => panic!("domain registry used before initialize() or install_registry()"),
    }
}

/// Length in bytes of the registrable suffix of `hostname`, or 0.
///
/// # Examples
/// ```
/// use domain_registry::{initialize, registry_suffix_length};
///
/// initialize();
/// assert_eq!(registry_suffix_length("www.google.com"), 3);
/// assert_eq!(registry_suffix_length("a.b.co.uk"), 5);
/// assert_eq!(registry_suffix_length("co.uk"), 0);
/// ```
///
/// # Panics
///
/// Panics if no registry is installed.
pub fn registry_suffix_length(hostname: impl AsRef<[u8]>) -> usize {
    installed().registry_length(hostname)
}

/// Like [`registry_suffix_length`], but an unknown rightmost label is
/// treated as the registry.
///
/// # Panics
///
/// Panics if no registry is installed.
pub fn registry_suffix_length_allow_unknown(hostname: impl AsRef<[u8]>) -> usize {
    installed().registry_length_allow_unknown(hostname)
}
