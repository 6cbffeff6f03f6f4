//! Reconciliation of asset links against the filesystem.
//!
//! A dependency `vendor/name` that declares source directory `dist` for
//! namespace `js` is exposed as
//! `<root>/<target dir of js>/vendor/name -> <install path>/dist`.
//!
//! # Structure
//!
//! - `install` - create or correct links for a dependency
//! - `remove` - remove links for a set of namespace entries
//! - `sweep` - remove dangling links and directories left empty
//!
//! Nothing is cached between calls: every operation reads the current state
//! of the filesystem before changing it, and a failing entry never stops the
//! remaining ones.

mod install;
mod remove;
mod sweep;

use std::path::{Path, PathBuf};

use crate::report::{Level, Reporter};
use crate::runtime::{Runtime, join_under};

pub use install::LinkAction;
pub use sweep::SweepSummary;

pub struct Linker<'a, R: Runtime, L: Reporter> {
    runtime: &'a R,
    reporter: &'a L,
    root: &'a Path,
}

impl<'a, R: Runtime, L: Reporter> Linker<'a, R, L> {
    /// Create a linker for the project rooted at `root`.
    pub fn new(runtime: &'a R, reporter: &'a L, root: &'a Path) -> Self {
        Self {
            runtime,
            reporter,
            root,
        }
    }

    /// Path of the link for `dependency` below a configured target directory.
    pub fn link_path(&self, target_dir: &str, dependency: &str) -> PathBuf {
        join_under(&join_under(self.root, target_dir), dependency)
    }

    fn report(&self, level: Level, message: String) {
        self.reporter.report(level, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_link_path() {
        let runtime = MockRuntime::new();
        let reporter = MemoryReporter::new();
        let root = PathBuf::from("/project");
        let linker = Linker::new(&runtime, &reporter, &root);

        assert_eq!(
            linker.link_path("public/vendor", "acme/widgets"),
            PathBuf::from("/project/public/vendor/acme/widgets")
        );
        assert_eq!(
            linker.link_path("/public/vendor/", "acme/widgets"),
            PathBuf::from("/project/public/vendor/acme/widgets")
        );
    }
}
