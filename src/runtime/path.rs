//! Path utility functions for normalization and joining.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // At the root (or an empty relative path) the `..` is kept
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => {
                result.push(component);
            }
        }
    }
    result
}

/// Join a configured relative path onto a base directory.
///
/// Configured directories are always anchored at `base`: a leading separator
/// or drive prefix in `relative` does not escape it, unlike [`Path::join`].
pub fn join_under(base: &Path, relative: &str) -> PathBuf {
    let mut result = base.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => result.push(other),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_simple() {
        assert_eq!(
            normalize_path(Path::new("/deps/acme-widgets/dist")),
            PathBuf::from("/deps/acme-widgets/dist")
        );
    }

    #[test]
    fn test_normalize_path_with_dot() {
        assert_eq!(
            normalize_path(Path::new("/deps/./acme-widgets/./dist")),
            PathBuf::from("/deps/acme-widgets/dist")
        );
    }

    #[test]
    fn test_normalize_path_with_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/project/public/../deps/dist")),
            PathBuf::from("/project/deps/dist")
        );
    }

    #[test]
    fn test_normalize_path_parent_at_root() {
        assert_eq!(
            normalize_path(Path::new("/deps/../../../etc")),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn test_normalize_path_relative() {
        assert_eq!(
            normalize_path(Path::new("public/vendor/../assets")),
            PathBuf::from("public/assets")
        );
    }

    #[test]
    fn test_normalize_path_trailing_separator() {
        assert_eq!(
            normalize_path(Path::new("/deps/acme-widgets/dist/")),
            PathBuf::from("/deps/acme-widgets/dist")
        );
    }

    #[test]
    fn test_normalize_path_only_dots() {
        assert_eq!(normalize_path(Path::new("./././.")), PathBuf::from(""));
    }

    #[test]
    fn test_join_under_relative() {
        assert_eq!(
            join_under(Path::new("/project"), "public/vendor"),
            PathBuf::from("/project/public/vendor")
        );
    }

    #[test]
    fn test_join_under_leading_separator_stays_under_base() {
        assert_eq!(
            join_under(Path::new("/project"), "/public/vendor"),
            PathBuf::from("/project/public/vendor")
        );
    }

    #[test]
    fn test_join_under_dot_components() {
        assert_eq!(
            join_under(Path::new("/deps/acme-widgets"), "./dist"),
            PathBuf::from("/deps/acme-widgets/dist")
        );
    }

    #[test]
    fn test_join_under_vendor_name() {
        assert_eq!(
            join_under(Path::new("/project/public/vendor"), "acme/widgets"),
            PathBuf::from("/project/public/vendor/acme/widgets")
        );
    }

    #[test]
    fn test_join_under_empty() {
        assert_eq!(
            join_under(Path::new("/deps/acme-widgets"), ""),
            PathBuf::from("/deps/acme-widgets")
        );
    }
}
