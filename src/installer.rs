//! Lifecycle entry points for asset linking.
//!
//! The host calls these after it has installed, updated or removed a
//! dependency, and [`Installer::cleanup`] once after a batch of operations.
//! None of them fail: problems are reported and the remaining entries are
//! still processed.

use log::debug;
use std::path::PathBuf;

use crate::linker::{LinkAction, Linker, SweepSummary};
use crate::namespace::{self, NamespaceMap, Role, removable};
use crate::package::{Dependency, InstallPaths, Package};
use crate::report::{Level, Reporter};
use crate::runtime::Runtime;

pub struct Installer<R: Runtime, P: InstallPaths, L: Reporter> {
    runtime: R,
    install_paths: P,
    reporter: L,
    root_path: PathBuf,
    extra_key: String,
    targets: NamespaceMap,
    sweep_exclusions: Vec<PathBuf>,
}

impl<R: Runtime, P: InstallPaths, L: Reporter> Installer<R, P, L> {
    /// Create an installer for the project whose manifest is `root_package`
    /// and lives in `root_path`. Target directories are resolved once here.
    #[tracing::instrument(skip(runtime, install_paths, reporter, root_package))]
    pub fn new(
        runtime: R,
        install_paths: P,
        reporter: L,
        root_package: &Package,
        root_path: PathBuf,
        extra_key: &str,
    ) -> Self {
        let targets = namespace::resolve(&root_package.extra, extra_key, Role::Target);
        debug!(
            "Root package {} declares {} target namespace(s)",
            root_package.name,
            targets.len()
        );

        Self {
            runtime,
            install_paths,
            reporter,
            root_path,
            extra_key: extra_key.to_string(),
            targets,
            sweep_exclusions: Vec::new(),
        }
    }

    /// Directories [`Installer::cleanup`] never enters, even when a target
    /// directory contains them.
    pub fn with_sweep_exclusions(mut self, dirs: Vec<PathBuf>) -> Self {
        self.sweep_exclusions = dirs;
        self
    }

    /// Link the assets of a newly installed dependency.
    #[tracing::instrument(skip(self, package), fields(package = %package.name))]
    pub fn install_package(&self, package: &Package) {
        let Some(dependency) = self.dependency(package) else {
            return;
        };
        let actions = self.linker().install_assets(&dependency, &self.targets);
        self.report_installed(&dependency, &actions);
    }

    /// Move links from the `old` to the `new` version of a dependency.
    ///
    /// Links for namespaces that `new` drops or points elsewhere are removed
    /// first, then every source of `new` is (re)installed.
    #[tracing::instrument(skip(self, old, new), fields(package = %new.name))]
    pub fn update_package(&self, old: &Package, new: &Package) {
        let Some(old_dependency) = self.dependency(old) else {
            return;
        };
        let Some(new_dependency) = self.dependency(new) else {
            return;
        };

        let stale = removable(&old_dependency.sources, &new_dependency.sources);
        debug!(
            "Unlinking {:?} of {} before update",
            stale.namespaces().collect::<Vec<_>>(),
            old.display_name()
        );

        let linker = self.linker();
        linker.remove_assets(&old_dependency, &self.targets, &stale);
        let actions = linker.install_assets(&new_dependency, &self.targets);
        self.report_installed(&new_dependency, &actions);
    }

    /// Remove every link of a dependency that is being uninstalled.
    #[tracing::instrument(skip(self, package), fields(package = %package.name))]
    pub fn uninstall_package(&self, package: &Package) {
        let Some(dependency) = self.dependency(package) else {
            return;
        };
        let removed = self
            .linker()
            .remove_assets(&dependency, &self.targets, &dependency.sources);
        debug!("Removed {} link(s) of {}", removed, dependency.name);
    }

    /// Remove dangling links and the directories they leave empty.
    #[tracing::instrument(skip(self))]
    pub fn cleanup(&self) -> SweepSummary {
        let summary = self.linker().sweep(&self.targets, &self.sweep_exclusions);
        if !summary.is_empty() {
            self.reporter.report(
                Level::Info,
                &format!(
                    "Removed {} dangling link(s) and {} empty director{}",
                    summary.links_removed,
                    summary.dirs_removed,
                    if summary.dirs_removed == 1 { "y" } else { "ies" }
                ),
            );
        }
        summary
    }

    fn linker(&self) -> Linker<'_, R, L> {
        Linker::new(&self.runtime, &self.reporter, &self.root_path)
    }

    /// Describe `package` for this event, or report why it cannot be handled.
    fn dependency(&self, package: &Package) -> Option<Dependency> {
        match self.install_paths.install_path(package) {
            Ok(install_path) => Some(Dependency::new(package, install_path, &self.extra_key)),
            Err(e) => {
                self.reporter.report(
                    Level::Error,
                    &format!("{}: Unable to locate package: {:#}", package.name, e),
                );
                None
            }
        }
    }

    fn report_installed(&self, dependency: &Dependency, actions: &[LinkAction]) {
        let changed = actions
            .iter()
            .filter(|a| matches!(a, LinkAction::Created | LinkAction::Replaced))
            .count();
        debug!(
            "{}: {} of {} asset link(s) changed",
            dependency.name,
            changed,
            actions.len()
        );
    }
}
