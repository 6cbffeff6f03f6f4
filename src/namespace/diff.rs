//! Update diffing of source directory declarations.

use super::NamespaceMap;

/// Entries of `old` whose link must go before `new` is installed.
///
/// A namespace is removable when `new` drops it or points it at a different
/// directory. The returned map keeps the old directories, in `old` order.
/// Namespaces only present in `new` never appear.
pub fn removable(old: &NamespaceMap, new: &NamespaceMap) -> NamespaceMap {
    old.iter()
        .filter(|(namespace, dir)| new.get(namespace) != Some(*dir))
        .collect()
}
