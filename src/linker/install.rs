use log::debug;

use super::Linker;
use crate::namespace::NamespaceMap;
use crate::package::Dependency;
use crate::report::{Level, Reporter};
use crate::runtime::{Runtime, join_under, normalize_path};

/// What happened to a single namespace entry during install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// A new link was created.
    Created,
    /// A link pointing elsewhere was replaced.
    Replaced,
    /// The link already pointed at the source directory.
    Unchanged,
    /// The entry was not applied; the reason has been reported.
    Skipped,
}

impl<'a, R: Runtime, L: Reporter> Linker<'a, R, L> {
    /// Link every source directory of `dependency` into its target directory.
    ///
    /// Returns one action per source entry, in declaration order.
    pub fn install_assets(&self, dependency: &Dependency, targets: &NamespaceMap) -> Vec<LinkAction> {
        dependency
            .sources
            .iter()
            .map(|(namespace, source_dir)| {
                self.install_entry(dependency, targets, namespace, source_dir)
            })
            .collect()
    }

    fn install_entry(
        &self,
        dependency: &Dependency,
        targets: &NamespaceMap,
        namespace: &str,
        source_dir: &str,
    ) -> LinkAction {
        let name = &dependency.name;

        let Some(target_dir) = targets.get(namespace) else {
            self.report(
                Level::Warning,
                format!("{}: Namespace not defined in root package: {}", name, namespace),
            );
            return LinkAction::Skipped;
        };

        let source = join_under(&dependency.install_path, source_dir);
        if !self.runtime.is_dir(&source) {
            self.report(
                Level::Warning,
                format!("{}: Asset directory does not exist: {}", name, source_dir),
            );
            return LinkAction::Skipped;
        }

        let target = self.link_path(target_dir, name);
        if let Some(parent) = target.parent()
            && !self.runtime.is_dir(parent)
        {
            debug!("Creating target directory {:?}", parent);
            if let Err(e) = self.runtime.create_dir_all(parent) {
                self.report(
                    Level::Error,
                    format!(
                        "{}: Unable to create target directory: {} ({:#})",
                        name,
                        parent.display(),
                        e
                    ),
                );
                return LinkAction::Skipped;
            }
        }

        self.report(
            Level::Custom,
            format!("  - Installing assets {}/{}", name, source_dir),
        );

        let mut replacing = false;
        if self.runtime.is_symlink(&target) {
            match self.runtime.resolve_link(&target) {
                Ok(current) if current == normalize_path(&source) => {
                    debug!("{:?} already points to {:?}", target, source);
                    return LinkAction::Unchanged;
                }
                Ok(current) => debug!("{:?} points to {:?}, relinking", target, current),
                Err(e) => debug!("{:?} is unreadable ({}), relinking", target, e),
            }

            if let Err(e) = self.runtime.remove_symlink(&target) {
                self.report(
                    Level::Error,
                    format!(
                        "{}: Unable to remove outdated link: {} ({:#})",
                        name,
                        target.display(),
                        e
                    ),
                );
                return LinkAction::Skipped;
            }
            replacing = true;
        } else if self.runtime.exists(&target) {
            self.report(
                Level::Error,
                format!(
                    "{}: Target exists and is not a symbolic link: {}",
                    name,
                    target.display()
                ),
            );
            return LinkAction::Skipped;
        }

        match self.runtime.symlink(&source, &target) {
            Ok(()) if replacing => LinkAction::Replaced,
            Ok(()) => LinkAction::Created,
            Err(e) => {
                self.report(
                    Level::Error,
                    format!(
                        "{}: Unable to create link {} -> {} ({:#})",
                        name,
                        target.display(),
                        source.display(),
                        e
                    ),
                );
                LinkAction::Skipped
            }
        }
    }
}
