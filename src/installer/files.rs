//! File operations for installed bundles
//!
//! This module handles:
//! - Clean replacement of a bundle directory
//! - Recursive removal
//! - Reading the version of an installed bundle

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{InstillError, Result};
use crate::manifest::{self, MANIFEST_FILE};

/// Prefix of staging directories created above a skills directory
const STAGING_PREFIX: &str = ".instill-";

fn write_failed(path: &Path, e: &io::Error) -> InstillError {
    InstillError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn remove_failed(path: &Path, e: &io::Error) -> InstillError {
    InstillError::FileRemoveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
    }
    Ok(())
}

fn write_tree(dir: &Path, files: &BTreeMap<PathBuf, Vec<u8>>) -> Result<()> {
    for (relative, content) in files {
        let target = dir.join(relative);
        ensure_parent_dir(&target)?;
        fs::write(&target, content).map_err(|e| write_failed(&target, &e))?;
    }
    Ok(())
}

/// Replace `dir` with exactly `files`.
///
/// The new tree is written to a staging directory first, so a failed write
/// leaves any previous content untouched. Stale files from an earlier install
/// never survive: the old directory is removed before the staged one is moved
/// into place.
///
/// Staging happens one level above the directory holding `dir` (for
/// `.claude/skills/x` that is `.claude`), never inside a skills directory
/// agents scan. A process killed mid-install leaves at most a `.instill-*`
/// directory there.
pub fn replace_dir(dir: &Path, files: &BTreeMap<PathBuf, Vec<u8>>) -> Result<()> {
    let parent = dir.parent().unwrap_or(dir);
    fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
    let staging_root = parent.parent().unwrap_or(parent);

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(staging_root)
        .map_err(|e| write_failed(staging_root, &e))?;
    write_tree(staging.path(), files)?;

    remove_dir(dir)?;
    fs::rename(staging.path(), dir).map_err(|e| write_failed(dir, &e))?;
    // The staging path is gone after the rename; nothing left to clean up.
    let _ = staging.keep();
    Ok(())
}

/// Remove `dir` recursively. Returns whether it existed.
pub fn remove_dir(dir: &Path) -> Result<bool> {
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(dir).map_err(|e| remove_failed(dir, &e))?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(dir).map_err(|e| remove_failed(dir, &e))?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(remove_failed(dir, &e)),
    }
}

/// Check if something is installed at `dir`
pub fn exists(dir: &Path) -> bool {
    fs::symlink_metadata(dir).is_ok()
}

/// Version recorded in the manifest installed at `dir`.
///
/// Missing, unreadable and unparseable manifests all yield an empty string.
pub fn installed_version_at(dir: &Path) -> String {
    let path = dir.join(MANIFEST_FILE);
    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return String::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read installed manifest");
            return String::new();
        }
    };
    match manifest::parse_version(&String::from_utf8_lossy(&content)) {
        Ok(version) => version.unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot parse installed manifest");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn files(entries: &[(&str, &str)]) -> BTreeMap<PathBuf, Vec<u8>> {
        entries
            .iter()
            .map(|(p, c)| (PathBuf::from(p), c.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn test_replace_creates_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("skills/x");
        replace_dir(&dir, &files(&[("SKILL.md", "a"), ("refs/b.md", "b")])).unwrap();
        assert_eq!(fs::read_to_string(dir.join("SKILL.md")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dir.join("refs/b.md")).unwrap(), "b");
    }

    #[test]
    fn test_replace_purges_stale_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("x");
        fs::create_dir_all(dir.join("old")).unwrap();
        fs::write(dir.join("old/stale.md"), "stale").unwrap();
        fs::write(dir.join("SKILL.md"), "old").unwrap();

        replace_dir(&dir, &files(&[("SKILL.md", "new")])).unwrap();
        assert_eq!(fs::read_to_string(dir.join("SKILL.md")).unwrap(), "new");
        assert!(!dir.join("old").exists());
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_replace_leaves_no_staging_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agent/skills/x");
        replace_dir(&dir, &files(&[("SKILL.md", "a")])).unwrap();
        replace_dir(&dir, &files(&[("SKILL.md", "b")])).unwrap();
        assert_eq!(entries(&temp.path().join("agent")), vec!["skills"]);
        assert_eq!(entries(&temp.path().join("agent/skills")), vec!["x"]);
    }

    #[test]
    fn test_staging_happens_outside_skills_dir() {
        let temp = TempDir::new().unwrap();
        let skills = temp.path().join("agent/skills");
        let dir = skills.join("x");
        // "a" is written as a file, so "a/b" cannot be created below it.
        let err = replace_dir(&dir, &files(&[("a", "file"), ("a/b", "nested")])).unwrap_err();
        assert!(matches!(err, InstillError::FileWriteFailed { path, .. }
            if path.contains(".instill-") && !path.contains("skills")));
        assert!(entries(&skills).is_empty());
    }

    #[test]
    fn test_failed_write_keeps_previous_install() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agent/skills/x");
        replace_dir(&dir, &files(&[("SKILL.md", "---\nname: x\nversion: 1.0\n---\n")])).unwrap();

        let err = replace_dir(
            &dir,
            &files(&[("SKILL.md", "v2"), ("a", "file"), ("a/b", "nested")]),
        )
        .unwrap_err();
        assert!(matches!(err, InstillError::FileWriteFailed { .. }));
        assert_eq!(installed_version_at(&dir), "1.0");
        assert_eq!(entries(&dir), vec!["SKILL.md"]);
        assert_eq!(entries(&temp.path().join("agent")), vec!["skills"]);
    }

    #[test]
    fn test_replace_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let skills = temp.path().join("skills");
        fs::write(&skills, "not a directory").unwrap();

        let err = replace_dir(&skills.join("x"), &files(&[("SKILL.md", "a")])).unwrap_err();
        assert!(matches!(err, InstillError::FileWriteFailed { path, .. }
            if path == skills.display().to_string()));
    }

    #[test]
    fn test_remove_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("x");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/f"), "f").unwrap();

        assert!(remove_dir(&dir).unwrap());
        assert!(!dir.exists());
        assert!(!remove_dir(&dir).unwrap());
    }

    #[test]
    fn test_installed_version_at() {
        let temp = TempDir::new().unwrap();
        assert_eq!(installed_version_at(temp.path()), "");

        fs::write(temp.path().join("SKILL.md"), "---\nname: x\nversion: '1.0'\n---\n").unwrap();
        assert_eq!(installed_version_at(temp.path()), "1.0");

        fs::write(temp.path().join("SKILL.md"), "old").unwrap();
        assert_eq!(installed_version_at(temp.path()), "");
    }
}
