//! File system operations (read, directory).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context("Failed to create directory")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_dir_impl(&self, path: &Path) -> Result<()> {
        fs::remove_dir(path).context("Failed to remove directory")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn try_exists_impl(&self, path: &Path) -> Result<bool> {
        path.try_exists()
            .with_context(|| format!("Failed to check whether {:?} exists", path))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_dir_impl(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).context("Failed to read directory")?;
        entries.map(|entry| Ok(entry?.path())).collect()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn canonicalize_impl(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).context("Failed to canonicalize path")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_dir_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("public/vendor");

        runtime.create_dir_all(&sub_dir).unwrap();
        assert!(runtime.exists(&sub_dir));
        assert!(runtime.is_dir(&sub_dir));

        let parent = dir.path().join("public");
        let entries = runtime.read_dir(&parent).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("vendor"));

        runtime.remove_dir(&sub_dir).unwrap();
        assert!(!runtime.exists(&sub_dir));
        assert!(runtime.read_dir(&parent).unwrap().is_empty());
    }

    #[test]
    fn test_real_runtime_read_to_string() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("composer.json");
        std::fs::write(&manifest, r#"{"name": "acme/widgets"}"#).unwrap();

        let content = runtime.read_to_string(&manifest).unwrap();
        assert!(content.contains("acme/widgets"));
    }

    #[test]
    fn test_real_runtime_remove_dir_not_empty_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("vendor");
        runtime.create_dir_all(&sub_dir.join("acme")).unwrap();

        assert!(runtime.remove_dir(&sub_dir).is_err());
        assert!(runtime.is_dir(&sub_dir));
    }

    #[test]
    fn test_real_runtime_try_exists() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        assert!(runtime.try_exists(dir.path()).unwrap());
        assert!(!runtime.try_exists(&dir.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_runtime_try_exists_unreadable_parent_fails() {
        use std::os::unix::fs::PermissionsExt;

        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir_all(locked.join("dist")).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root bypasses permission checks, so only assert when stat actually fails
        let stat = std::fs::metadata(locked.join("dist"));
        if let Err(e) = stat
            && e.kind() == std::io::ErrorKind::PermissionDenied
        {
            assert!(runtime.try_exists(&locked.join("dist")).is_err());
            assert!(!runtime.exists(&locked.join("dist")));
        }

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;

        let result = runtime.read_to_string(std::path::Path::new("/nonexistent/path/file.txt"));
        assert!(result.is_err());

        let result = runtime.read_dir(std::path::Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }
}
