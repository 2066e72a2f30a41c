//! Library tree pruning

use crate::error::{BuildError, BuildResult};
use crate::models::RetainedFileSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Delete every file under `dir` that is not in the retained set.
///
/// Returns the deleted paths. Directories are left in place.
pub fn prune_unretained(dir: &Path, retained: &RetainedFileSet) -> BuildResult<Vec<PathBuf>> {
    let mut doomed = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| listing_error(dir, source))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if retained.contains(entry.path()) {
            debug!(file = %entry.path().display(), "Keeping file");
        } else {
            doomed.push(entry.into_path());
        }
    }

    for path in &doomed {
        debug!(file = %path.display(), "Deleting file");
        fs::remove_file(path).map_err(|e| BuildError::io("delete", path, e))?;
    }

    Ok(doomed)
}

/// Remove directories under (and including) `dir` that are empty, deepest first.
///
/// A directory whose children were all removed is removed as well.
pub fn remove_empty_dirs(dir: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = entry.map_err(|source| listing_error(dir, source))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let mut children =
            fs::read_dir(path).map_err(|e| BuildError::io("list directory", path, e))?;
        if children.next().is_none() {
            debug!(dir = %path.display(), "Removing empty directory");
            fs::remove_dir(path).map_err(|e| BuildError::io("delete directory", path, e))?;
            removed.push(path.to_path_buf());
        }
    }

    Ok(removed)
}

/// Name the directory that failed, falling back to the walk root.
fn listing_error(root: &Path, source: walkdir::Error) -> BuildError {
    let path = source.path().unwrap_or(root).to_path_buf();
    BuildError::DirectoryListing { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManifestDescriptor;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, rel).unwrap();
    }

    fn retained(root: &Path, paths: &[&str]) -> RetainedFileSet {
        let descriptor = ManifestDescriptor {
            paths: paths.iter().map(|p| p.to_string()).collect(),
        };
        RetainedFileSet::from_manifest(root, &descriptor)
    }

    #[test]
    fn test_prune_keeps_only_retained_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "lib/a.js");
        touch(root, "lib/b.js");
        touch(root, "lib/c.js");
        touch(root, "lib/utils/d.js");

        let kept = retained(root, &["lib/a.js", "lib/b.js", "img/x.png"]);
        let mut removed = prune_unretained(&root.join("lib"), &kept).unwrap();
        removed.sort();

        assert_eq!(removed, vec![root.join("lib/c.js"), root.join("lib/utils/d.js")]);
        assert!(root.join("lib/a.js").exists());
        assert!(root.join("lib/b.js").exists());
        assert!(root.join("lib/utils").is_dir());
    }

    #[test]
    fn test_prune_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        let err = prune_unretained(&lib, &RetainedFileSet::default()).unwrap_err();
        assert!(matches!(err, BuildError::DirectoryListing { ref path, .. } if *path == lib));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_nested_dir_is_named() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "lib/locked/a.js");
        let locked = root.join("lib/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can list it anyway
        let listable = fs::read_dir(&locked).is_ok();

        let result = prune_unretained(&root.join("lib"), &RetainedFileSet::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !listable {
            let err = result.unwrap_err();
            assert!(matches!(err, BuildError::DirectoryListing { ref path, .. } if *path == locked));
            assert!(err.to_string().contains("locked"));
        }
    }

    #[test]
    fn test_remove_empty_dirs_cascades() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("lib/a/b/c")).unwrap();
        fs::create_dir_all(root.join("lib/keep/empty")).unwrap();
        touch(root, "lib/keep/file.js");

        let removed = remove_empty_dirs(&root.join("lib")).unwrap();

        assert_eq!(removed.len(), 4);
        assert!(!root.join("lib/a").exists());
        assert!(!root.join("lib/keep/empty").exists());
        assert!(root.join("lib/keep/file.js").exists());
        assert!(root.join("lib").is_dir());
    }

    #[test]
    fn test_remove_empty_dirs_removes_root_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        fs::create_dir_all(lib.join("x/y")).unwrap();

        let removed = remove_empty_dirs(&lib).unwrap();

        assert_eq!(removed, vec![lib.join("x/y"), lib.join("x"), lib.clone()]);
        assert!(!lib.exists());
    }
}
