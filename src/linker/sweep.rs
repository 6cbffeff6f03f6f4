use log::debug;
use std::path::{Path, PathBuf};

use super::Linker;
use crate::namespace::NamespaceMap;
use crate::report::{Level, Reporter};
use crate::runtime::{Runtime, join_under, normalize_path};

/// What a sweep removed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub links_removed: usize,
    pub dirs_removed: usize,
}

impl SweepSummary {
    pub fn is_empty(&self) -> bool {
        self.links_removed == 0 && self.dirs_removed == 0
    }
}

/// Directories a sweep must not remove or must not enter.
struct Walk<'w> {
    keep: &'w [PathBuf],
    exclude: &'w [PathBuf],
}

impl<'a, R: Runtime, L: Reporter> Linker<'a, R, L> {
    /// Remove dangling links below every target directory, then any directory
    /// left empty. Children are handled before their parent, so a directory
    /// emptied by removing its links goes in the same pass.
    ///
    /// Links whose referent exists, or whose referent cannot be checked, are
    /// never touched and links are never followed. The configured target
    /// directories themselves are kept. Directories in `exclude` (such as
    /// the package install directory when a target is the project root) are
    /// neither entered nor removed.
    pub fn sweep(&self, targets: &NamespaceMap, exclude: &[PathBuf]) -> SweepSummary {
        let roots: Vec<PathBuf> = targets
            .iter()
            .map(|(_, dir)| normalize_path(&join_under(self.root, dir)))
            .collect();
        let exclude: Vec<PathBuf> = exclude.iter().map(|dir| normalize_path(dir)).collect();
        let walk = Walk {
            keep: &roots,
            exclude: &exclude,
        };

        let mut summary = SweepSummary::default();
        let mut swept: Vec<&PathBuf> = Vec::new();
        for dir in &roots {
            if swept.contains(&dir) {
                continue;
            }
            swept.push(dir);

            if walk.exclude.contains(dir) {
                debug!("Target directory {:?} is excluded, skipping", dir);
                continue;
            }
            if !self.runtime.is_dir(dir) {
                debug!("Target directory {:?} does not exist, skipping", dir);
                continue;
            }
            debug!("Sweeping {:?}", dir);
            self.sweep_dir(dir, &walk, &mut summary);
        }

        summary
    }

    fn sweep_dir(&self, dir: &Path, walk: &Walk<'_>, summary: &mut SweepSummary) {
        let mut entries = match self.runtime.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.report(
                    Level::Warning,
                    format!("Unable to read directory: {} ({:#})", dir.display(), e),
                );
                return;
            }
        };
        entries.sort();

        for entry in entries {
            if self.runtime.is_symlink(&entry) {
                match self.runtime.try_exists(&entry) {
                    Ok(true) => {}
                    Ok(false) => self.remove_dangling(&entry, summary),
                    Err(e) => self.report(
                        Level::Warning,
                        format!(
                            "Unable to check link target, keeping link: {} ({:#})",
                            entry.display(),
                            e
                        ),
                    ),
                }
            } else if walk.exclude.contains(&entry) {
                debug!("Not sweeping excluded directory {:?}", entry);
            } else if self.runtime.is_dir(&entry) {
                self.sweep_dir(&entry, walk, summary);
                if !walk.keep.contains(&entry) {
                    self.remove_if_empty(&entry, summary);
                }
            }
        }
    }

    fn remove_dangling(&self, link: &Path, summary: &mut SweepSummary) {
        match self.runtime.remove_symlink(link) {
            Ok(()) => {
                self.report(
                    Level::Custom,
                    format!("  - Removing dangling link {}", link.display()),
                );
                summary.links_removed += 1;
            }
            Err(e) => self.report(
                Level::Error,
                format!(
                    "Unable to remove dangling link: {} ({:#})",
                    link.display(),
                    e
                ),
            ),
        }
    }

    fn remove_if_empty(&self, dir: &Path, summary: &mut SweepSummary) {
        match self.runtime.read_dir(dir) {
            Ok(entries) if entries.is_empty() => match self.runtime.remove_dir(dir) {
                Ok(()) => {
                    debug!("Removed empty directory {:?}", dir);
                    summary.dirs_removed += 1;
                }
                Err(e) => self.report(
                    Level::Warning,
                    format!(
                        "Unable to remove empty directory: {} ({:#})",
                        dir.display(),
                        e
                    ),
                ),
            },
            Ok(_) => {}
            Err(e) => self.report(
                Level::Warning,
                format!("Unable to read directory: {} ({:#})", dir.display(), e),
            ),
        }
    }
}
