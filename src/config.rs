//! Project configuration for the command-line host.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::{Path, PathBuf};

use crate::namespace::DEFAULT_EXTRA_KEY;
use crate::package::{Package, VendorInstallPaths};
use crate::runtime::Runtime;

/// Default manifest file name of the project and of every package.
pub const DEFAULT_MANIFEST: &str = "composer.json";

/// Default directory packages are installed into, relative to the project.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory holding the project manifest.
    pub project_root: PathBuf,
    pub manifest_name: String,
    pub extra_key: String,
    pub vendor_dir: PathBuf,
    pub root_package: Package,
}

impl Config {
    /// Resolve the project at `project` and load its manifest.
    ///
    /// A relative `vendor_dir` is taken relative to the project root.
    #[tracing::instrument(skip(runtime))]
    pub fn new<R: Runtime>(
        runtime: &R,
        project: &Path,
        manifest_name: Option<String>,
        extra_key: Option<String>,
        vendor_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let project_root = runtime
            .canonicalize(project)
            .with_context(|| format!("Project directory {:?} does not exist", project))?;
        let manifest_name = manifest_name.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
        let extra_key = extra_key.unwrap_or_else(|| DEFAULT_EXTRA_KEY.to_string());
        let vendor_dir =
            project_root.join(vendor_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_VENDOR_DIR)));

        let manifest = project_root.join(&manifest_name);
        if !runtime.exists(&manifest) {
            bail!("No {} found in {}", manifest_name, project_root.display());
        }
        let root_package = Package::load(runtime, &manifest)?;
        debug!("Loaded root package {} from {:?}", root_package.name, manifest);

        Ok(Self {
            project_root,
            manifest_name,
            extra_key,
            vendor_dir,
            root_package,
        })
    }

    pub fn install_paths(&self) -> VendorInstallPaths {
        VendorInstallPaths::new(&self.vendor_dir)
    }

    /// Directories the cleanup sweep must not enter when a target directory
    /// contains them: installed packages and version control metadata.
    pub fn sweep_exclusions(&self) -> Vec<PathBuf> {
        vec![self.vendor_dir.clone(), self.project_root.join(".git")]
    }

    /// Manifest of an installed package, `<vendor_dir>/<name>/<manifest>`.
    pub fn package_manifest(&self, name: &str) -> PathBuf {
        crate::runtime::join_under(&self.vendor_dir, name).join(&self.manifest_name)
    }
}
