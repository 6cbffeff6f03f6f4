//! Asset namespaces and their directories.
//!
//! A package declares its asset directories under a reserved key of its
//! `extra` configuration:
//!
//! ```json
//! { "extra": { "octris/assets": { "target": { "js": "public/vendor" } } } }
//! ```
//!
//! The root project declares `target` directories, dependencies declare
//! `source` directories. Either may be a single path string (the default
//! `assets` namespace) or an object of namespace to path.

mod diff;

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

pub use diff::removable;

/// Default reserved key in a package's `extra` configuration.
pub const DEFAULT_EXTRA_KEY: &str = "octris/assets";

/// Namespace used when a role is declared as a single path.
pub const DEFAULT_NAMESPACE: &str = "assets";

/// Which side of a link a declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Directories of the root project that receive links.
    Target,
    /// Directories inside a dependency that links point at.
    Source,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Target => "target",
            Role::Source => "source",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping of namespace name to a relative directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap(IndexMap<String, String>);

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: impl Into<String>, dir: impl Into<String>) {
        self.0.insert(namespace.into(), dir.into());
    }

    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.0.get(namespace).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(namespace, dir)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(ns, dir)| (ns.as_str(), dir.as_str()))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NamespaceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = NamespaceMap::new();
        for (namespace, dir) in iter {
            map.insert(namespace, dir);
        }
        map
    }
}

/// Extract the namespace map a package declares for `role`.
///
/// Never fails: a missing or malformed declaration yields an empty map,
/// non-string entries and empty namespace names are dropped.
pub fn resolve(extra: &Value, extra_key: &str, role: Role) -> NamespaceMap {
    let Some(declared) = extra.get(extra_key).and_then(|assets| assets.get(role.as_str())) else {
        return NamespaceMap::new();
    };

    match declared {
        Value::String(dir) => [(DEFAULT_NAMESPACE, dir.as_str())].into_iter().collect(),
        Value::Object(entries) => entries
            .iter()
            .filter(|(namespace, _)| !namespace.is_empty())
            .filter_map(|(namespace, dir)| dir.as_str().map(|dir| (namespace.as_str(), dir)))
            .collect(),
        _ => NamespaceMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(map: &NamespaceMap) -> Vec<(&str, &str)> {
        map.iter().collect()
    }

    #[test]
    fn test_resolve_scalar_uses_default_namespace() {
        let extra = json!({ "octris/assets": { "target": "public/assets" } });
        let map = resolve(&extra, DEFAULT_EXTRA_KEY, Role::Target);
        assert_eq!(pairs(&map), vec![("assets", "public/assets")]);
    }

    #[test]
    fn test_resolve_mapping_preserves_order() {
        let extra = json!({
            "octris/assets": {
                "source": { "js": "dist/js", "css": "dist/css", "fonts": "fonts" }
            }
        });
        let map = resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source);
        assert_eq!(
            pairs(&map),
            vec![("js", "dist/js"), ("css", "dist/css"), ("fonts", "fonts")]
        );
    }

    #[test]
    fn test_resolve_drops_non_string_entries() {
        let extra = json!({
            "octris/assets": {
                "source": { "js": "dist", "bad": 42, "css": "styles", "list": ["a"], "none": null }
            }
        });
        let map = resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source);
        assert_eq!(pairs(&map), vec![("js", "dist"), ("css", "styles")]);
    }

    #[test]
    fn test_resolve_drops_empty_namespace() {
        let extra = json!({ "octris/assets": { "source": { "": "dist", "js": "dist" } } });
        let map = resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source);
        assert_eq!(pairs(&map), vec![("js", "dist")]);
    }

    #[test]
    fn test_resolve_missing_role_is_empty() {
        let extra = json!({ "octris/assets": { "target": "public" } });
        assert!(resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source).is_empty());
    }

    #[test]
    fn test_resolve_missing_key_is_empty() {
        let extra = json!({ "branch-alias": { "dev-master": "1.0-dev" } });
        assert!(resolve(&extra, DEFAULT_EXTRA_KEY, Role::Target).is_empty());
        assert!(resolve(&Value::Null, DEFAULT_EXTRA_KEY, Role::Target).is_empty());
    }

    #[test]
    fn test_resolve_malformed_shapes_are_empty() {
        for declared in [json!(42), json!(["dist"]), json!(null), json!(true)] {
            let extra = json!({ "octris/assets": { "source": declared } });
            assert!(resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source).is_empty());
        }

        let extra = json!({ "octris/assets": "dist" });
        assert!(resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source).is_empty());
    }

    #[test]
    fn test_resolve_custom_extra_key() {
        let extra = json!({ "acme/assets": { "source": "dist" } });
        assert!(resolve(&extra, DEFAULT_EXTRA_KEY, Role::Source).is_empty());
        let map = resolve(&extra, "acme/assets", Role::Source);
        assert_eq!(map.get("assets"), Some("dist"));
    }

    #[test]
    fn test_namespace_map_lookup() {
        let map: NamespaceMap = [("js", "public/vendor")].into_iter().collect();
        assert_eq!(map.get("css"), None);
        assert_eq!(map.get("js"), Some("public/vendor"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.namespaces().collect::<Vec<_>>(), vec!["js"]);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Target.to_string(), "target");
        assert_eq!(Role::Source.to_string(), "source");
    }
}
