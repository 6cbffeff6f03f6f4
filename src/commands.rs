//! Command implementations for the `assetlink` binary.
//!
//! Each command stands in for one host event: it runs the matching lifecycle
//! operation for every named package and finishes with a cleanup sweep, the
//! way a package manager runs its post-command hook after a batch.

use anyhow::{Result, bail};
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::installer::Installer;
use crate::package::{Package, VendorInstallPaths};
use crate::report::Reporter;
use crate::runtime::Runtime;

fn installer<R: Runtime, L: Reporter>(
    runtime: R,
    reporter: L,
    config: &Config,
) -> Installer<R, VendorInstallPaths, L> {
    Installer::new(
        runtime,
        config.install_paths(),
        reporter,
        &config.root_package,
        config.project_root.clone(),
        &config.extra_key,
    )
    .with_sweep_exclusions(config.sweep_exclusions())
}

fn load_installed<R: Runtime>(runtime: &R, config: &Config, name: &str) -> Result<Package> {
    let manifest = config.package_manifest(name);
    if !runtime.exists(&manifest) {
        bail!("Package {} is not installed ({} not found)", name, manifest.display());
    }
    let package = Package::load(runtime, &manifest)?;
    if package.name != name {
        bail!(
            "{} declares package {}, expected {}",
            manifest.display(),
            package.name,
            name
        );
    }
    Ok(package)
}

fn finish<R: Runtime, L: Reporter>(installer: &Installer<R, VendorInstallPaths, L>, sweep: bool) {
    if sweep {
        installer.cleanup();
    } else {
        debug!("Skipping cleanup");
    }
}

/// Link the assets of installed packages.
#[tracing::instrument(skip(runtime, reporter, config))]
pub fn install<R: Runtime, L: Reporter>(
    runtime: R,
    reporter: L,
    config: &Config,
    names: &[String],
    sweep: bool,
) -> Result<()> {
    // Read every manifest before touching any link
    let packages = names
        .iter()
        .map(|name| load_installed(&runtime, config, name))
        .collect::<Result<Vec<_>>>()?;

    let installer = installer(runtime, reporter, config);
    for package in &packages {
        installer.install_package(package);
    }
    finish(&installer, sweep);
    Ok(())
}

/// Relink a package after it changed from the version described by `from`.
#[tracing::instrument(skip(runtime, reporter, config))]
pub fn update<R: Runtime, L: Reporter>(
    runtime: R,
    reporter: L,
    config: &Config,
    name: &str,
    from: &Path,
    sweep: bool,
) -> Result<()> {
    let old = Package::load(&runtime, from)?;
    if old.name != name {
        bail!(
            "{} declares package {}, expected {}",
            from.display(),
            old.name,
            name
        );
    }
    let new = load_installed(&runtime, config, name)?;

    let installer = installer(runtime, reporter, config);
    installer.update_package(&old, &new);
    finish(&installer, sweep);
    Ok(())
}

/// Remove the links of a package. `from` describes what was installed when
/// the package directory is already gone.
#[tracing::instrument(skip(runtime, reporter, config))]
pub fn uninstall<R: Runtime, L: Reporter>(
    runtime: R,
    reporter: L,
    config: &Config,
    name: &str,
    from: Option<PathBuf>,
    sweep: bool,
) -> Result<()> {
    let package = match from {
        Some(manifest) => Package::load(&runtime, &manifest)?,
        None => load_installed(&runtime, config, name)?,
    };
    if package.name != name {
        bail!("Manifest declares package {}, expected {}", package.name, name);
    }

    let installer = installer(runtime, reporter, config);
    installer.uninstall_package(&package);
    finish(&installer, sweep);
    Ok(())
}

/// Remove dangling links and empty directories below every target directory.
#[tracing::instrument(skip(runtime, reporter, config))]
pub fn cleanup<R: Runtime, L: Reporter>(runtime: R, reporter: L, config: &Config) -> Result<()> {
    let summary = installer(runtime, reporter, config).cleanup();
    debug!("Cleanup finished: {:?}", summary);
    Ok(())
}
