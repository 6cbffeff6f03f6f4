//! Packages and the dependencies whose assets get linked.

mod install_path;
mod manifest;

use std::path::PathBuf;

use crate::namespace::{self, NamespaceMap, Role};

pub use install_path::{InstallPaths, VendorInstallPaths};
pub use manifest::Package;

#[cfg(test)]
pub use install_path::MockInstallPaths;

/// Snapshot of one dependency for the duration of a single lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    /// Package name, also the link name below each target directory.
    pub name: String,
    pub install_path: PathBuf,
    /// Declared source directories, relative to `install_path`.
    pub sources: NamespaceMap,
}

impl Dependency {
    pub fn new(package: &Package, install_path: PathBuf, extra_key: &str) -> Self {
        Self {
            name: package.name.clone(),
            install_path,
            sources: namespace::resolve(&package.extra, extra_key, Role::Source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::DEFAULT_EXTRA_KEY;
    use serde_json::json;

    #[test]
    fn test_dependency_resolves_sources() {
        let package = Package::new(
            "acme/widgets",
            json!({ "octris/assets": { "source": { "js": "dist" }, "target": "ignored" } }),
        );
        let dep = Dependency::new(&package, PathBuf::from("/deps/acme-widgets"), DEFAULT_EXTRA_KEY);

        assert_eq!(dep.name, "acme/widgets");
        assert_eq!(dep.install_path, PathBuf::from("/deps/acme-widgets"));
        assert_eq!(dep.sources.iter().collect::<Vec<_>>(), vec![("js", "dist")]);
    }

    #[test]
    fn test_dependency_without_assets() {
        let package = Package::new("acme/plain", json!({}));
        let dep = Dependency::new(&package, PathBuf::from("/deps/plain"), DEFAULT_EXTRA_KEY);
        assert!(dep.sources.is_empty());
    }
}
