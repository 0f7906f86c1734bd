//! Bundle discovery for source directories
//!
//! This module handles:
//! - Finding bundle roots (directories that contain a `SKILL.md`)
//! - Collecting the files of each bundle, minus housekeeping files
//!
//! A `SKILL.md` marks a bundle boundary: discovery does not descend into a
//! bundle root, so nested manifests belong to the enclosing bundle.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{InstillError, Result};
use crate::manifest::{self, MANIFEST_FILE};

/// Files never copied into an install target
pub const EXCLUDED_FILES: &[&str] = &["README.md", "metadata.json"];

/// Directories pruned from bundle traversal
const VCS_DIRS: &[&str] = &[".git"];

/// A skill bundle read from a source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Sanitized bundle name, used as the install directory name
    pub name: String,

    /// Bundle root in the source tree
    pub root: PathBuf,

    /// File contents keyed by path relative to `root`
    pub files: BTreeMap<PathBuf, Vec<u8>>,
}

/// Check if a file is excluded from installation
///
/// Housekeeping files and anything starting with `_` stay in the source.
pub fn is_excluded(file_name: &str) -> bool {
    EXCLUDED_FILES.contains(&file_name) || file_name.starts_with('_')
}

fn is_vcs_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| VCS_DIRS.contains(&name))
}

fn walk_error(root: &Path, err: &walkdir::Error) -> InstillError {
    InstillError::SourceReadFailed {
        path: err
            .path()
            .unwrap_or(root)
            .display()
            .to_string(),
        reason: err.to_string(),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| InstillError::SourceReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Find every bundle root below `source`, depth-first in file-name order.
fn find_bundle_roots(source: &Path) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();
    let mut walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| walk_error(source, &e))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_vcs_dir(&entry) {
            walker.skip_current_dir();
            continue;
        }
        if entry.path().join(MANIFEST_FILE).is_file() {
            roots.push(entry.path().to_path_buf());
            walker.skip_current_dir();
        }
    }
    Ok(roots)
}

/// Collect the installable files of one bundle.
fn collect_files(root: &Path) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
    let mut files = BTreeMap::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_vcs_dir(e));
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, &e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_excluded(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.insert(relative, read_file(entry.path())?);
    }
    Ok(files)
}

/// Load the bundle rooted at `root`.
pub fn load_bundle(root: &Path) -> Result<Bundle> {
    let manifest_path = root.join(MANIFEST_FILE);
    let content = read_file(&manifest_path)?;
    let name = manifest::parse_name(&String::from_utf8_lossy(&content)).map_err(|source| {
        InstillError::ManifestInvalid {
            path: manifest_path.display().to_string(),
            source,
        }
    })?;
    Ok(Bundle {
        name,
        root: root.to_path_buf(),
        files: collect_files(root)?,
    })
}

/// Discover all bundles in a source directory
///
/// Returns an empty list if the tree holds no `SKILL.md`; the caller decides
/// whether that is an error. Fails on the first unreadable entry, on an
/// invalid manifest, or when two bundles share a name.
pub fn discover_bundles(source: &Path) -> Result<Vec<Bundle>> {
    if !source.is_dir() {
        return Err(InstillError::SourceNotFound {
            path: source.display().to_string(),
        });
    }

    let mut bundles: Vec<Bundle> = Vec::new();
    for root in find_bundle_roots(source)? {
        let bundle = load_bundle(&root)?;
        if let Some(existing) = bundles.iter().find(|b| b.name == bundle.name) {
            return Err(InstillError::DuplicateBundle {
                name: bundle.name,
                first: existing.root.display().to_string(),
                second: bundle.root.display().to_string(),
            });
        }
        bundles.push(bundle);
    }
    Ok(bundles)
}

/// Version of the first bundle found in `source`.
///
/// Only the first manifest is inspected; a missing or blank `version` field
/// is `None`.
pub fn bundle_version(source: &Path) -> Result<Option<String>> {
    let Some(root) = find_bundle_roots(source)?.into_iter().next() else {
        return Ok(None);
    };
    let content = read_file(&root.join(MANIFEST_FILE))?;
    Ok(manifest::parse_version(&String::from_utf8_lossy(&content))
        .ok()
        .flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(base: &Path, rel: &str, content: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn keys(bundle: &Bundle) -> Vec<String> {
        bundle
            .files
            .keys()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_root_bundle() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\nname: x\n---\n");
        let bundles = discover_bundles(temp.path()).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].name, "x");
        assert_eq!(keys(&bundles[0]), vec!["SKILL.md"]);
    }

    #[test]
    fn test_nested_files_keep_relative_paths() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "skills/my-tool/SKILL.md", "---\nname: my-tool\n---\n");
        write(temp.path(), "skills/my-tool/references/commands.md", "# Commands\n");
        let bundles = discover_bundles(temp.path()).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(
            keys(&bundles[0]),
            vec!["SKILL.md", "references/commands.md"]
        );
    }

    #[test]
    fn test_exclusions() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\nname: x\n---\n");
        write(temp.path(), "README.md", "repo readme");
        write(temp.path(), "metadata.json", "{}");
        write(temp.path(), "_internal.md", "private");
        write(temp.path(), "docs/_draft.md", "private");
        write(temp.path(), ".git/config", "[core]");
        write(temp.path(), "references.md", "keep this");
        let bundles = discover_bundles(temp.path()).unwrap();
        assert_eq!(keys(&bundles[0]), vec!["SKILL.md", "references.md"]);
    }

    #[test]
    fn test_multiple_bundles() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "skills/b/SKILL.md", "---\nname: beta\n---\n");
        write(temp.path(), "skills/a/SKILL.md", "---\nname: alpha\n---\n");
        write(temp.path(), "other/notes.md", "not a bundle");
        let bundles = discover_bundles(temp.path()).unwrap();
        let names: Vec<_> = bundles.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_nested_manifest_not_separate_bundle() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "outer/SKILL.md", "---\nname: outer\n---\n");
        write(temp.path(), "outer/inner/SKILL.md", "---\nname: inner\n---\n");
        let bundles = discover_bundles(temp.path()).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].name, "outer");
        assert!(keys(&bundles[0]).contains(&"inner/SKILL.md".to_string()));
    }

    #[test]
    fn test_name_is_sanitized() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\nname: ../../etc/evil\n---\n");
        let bundles = discover_bundles(temp.path()).unwrap();
        assert_eq!(bundles[0].name, "etc-evil");
    }

    #[test]
    fn test_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\ndescription: x\n---\n");
        let err = discover_bundles(temp.path()).unwrap_err();
        assert!(matches!(err, InstillError::ManifestInvalid { .. }));
    }

    #[test]
    fn test_duplicate_names() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a/SKILL.md", "---\nname: Same\n---\n");
        write(temp.path(), "b/SKILL.md", "---\nname: same\n---\n");
        let err = discover_bundles(temp.path()).unwrap_err();
        assert!(matches!(err, InstillError::DuplicateBundle { name, .. } if name == "same"));
    }

    #[test]
    fn test_empty_source() {
        let temp = TempDir::new().unwrap();
        assert!(discover_bundles(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = discover_bundles(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, InstillError::SourceNotFound { .. }));
    }

    #[test]
    fn test_bundle_version() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\nname: x\nversion: \"1.2\"\n---\n");
        assert_eq!(bundle_version(temp.path()).unwrap().as_deref(), Some("1.2"));
    }

    #[test]
    fn test_bundle_version_absent() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "SKILL.md", "---\nname: x\n---\n");
        assert_eq!(bundle_version(temp.path()).unwrap(), None);

        let empty = TempDir::new().unwrap();
        assert_eq!(bundle_version(empty.path()).unwrap(), None);
    }

    #[test]
    fn test_is_excluded() {
        assert!(is_excluded("README.md"));
        assert!(is_excluded("metadata.json"));
        assert!(is_excluded("_private.txt"));
        assert!(!is_excluded("readme.md"));
        assert!(!is_excluded("SKILL.md"));
    }
}
