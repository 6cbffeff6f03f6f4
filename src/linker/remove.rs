use log::debug;

use super::Linker;
use crate::namespace::NamespaceMap;
use crate::package::Dependency;
use crate::report::{Level, Reporter};
use crate::runtime::{Runtime, join_under};

impl<'a, R: Runtime, L: Reporter> Linker<'a, R, L> {
    /// Remove the links of `dependency` for the given `(namespace, source dir)` entries.
    ///
    /// A link that is already gone is not an error. Returns the number of
    /// links removed.
    pub fn remove_assets(
        &self,
        dependency: &Dependency,
        targets: &NamespaceMap,
        entries: &NamespaceMap,
    ) -> usize {
        let name = &dependency.name;
        let mut removed = 0;

        for (namespace, source_dir) in entries.iter() {
            let Some(target_dir) = targets.get(namespace) else {
                self.report(
                    Level::Warning,
                    format!("{}: Namespace not defined in root package: {}", name, namespace),
                );
                continue;
            };

            let target = self.link_path(target_dir, name);
            if let Some(parent) = target.parent()
                && !self.runtime.is_dir(parent)
            {
                debug!("{:?} does not exist, nothing to remove", parent);
                continue;
            }

            if !self.runtime.is_symlink(&target) {
                debug!("{:?} is not a symlink, nothing to remove", target);
                continue;
            }

            let source = join_under(&dependency.install_path, source_dir);
            match self.runtime.remove_symlink(&target) {
                Ok(()) => {
                    self.report(
                        Level::Custom,
                        format!("  - Removing assets {}/{}", name, source_dir),
                    );
                    removed += 1;
                }
                Err(e) => self.report(
                    Level::Error,
                    format!(
                        "{}: Unable to remove link {} -> {} ({:#})",
                        name,
                        target.display(),
                        source.display(),
                        e
                    ),
                ),
            }
        }

        removed
    }
}
