//! Where dependencies live on disk.

use anyhow::{Result, bail};
use std::path::PathBuf;

use super::Package;
use crate::runtime::join_under;

/// Provides the directory a package's files are installed into.
#[cfg_attr(test, mockall::automock)]
pub trait InstallPaths {
    fn install_path(&self, package: &Package) -> Result<PathBuf>;
}

/// Packages installed as `<vendor_dir>/<vendor>/<name>`.
#[derive(Debug, Clone)]
pub struct VendorInstallPaths {
    vendor_dir: PathBuf,
}

impl VendorInstallPaths {
    pub fn new(vendor_dir: impl Into<PathBuf>) -> Self {
        Self {
            vendor_dir: vendor_dir.into(),
        }
    }
}

impl InstallPaths for VendorInstallPaths {
    fn install_path(&self, package: &Package) -> Result<PathBuf> {
        if package.name.is_empty() {
            bail!("Package has no name");
        }
        if package.name.split('/').any(|part| part == ".." || part == ".") {
            bail!("Invalid package name: {}", package.name);
        }
        Ok(join_under(&self.vendor_dir, &package.name))
    }
}
