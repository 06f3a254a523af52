//! Deterministic file discovery with directory pruning.
//!
//! Hidden directories (name starts with `.`) and `node_modules` are pruned via
//! `WalkDir::filter_entry`, so their subtrees are never read. Entries are
//! visited depth-first in file-name order.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SiteAuditError;

/// Dependency directories pruned in addition to hidden ones.
const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Checks if a directory entry should be pruned (excluded from traversal).
///
/// The walk root (depth 0) is never pruned, so walking `.` works.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || excludes.contains(name))
}

/// Gathers every file under `root` whose name ends with `suffix` (e.g. `".css"`).
///
/// The match is an exact, case-sensitive suffix on the file name. Symlinks are
/// not followed and never reported. Any I/O error aborts the walk.
pub fn gather_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    gather_files_with_excludes(root, suffix, &[])
}

/// Like [`gather_files`], with extra directory names to prune.
pub fn gather_files_with_excludes(
    root: &Path,
    suffix: &str,
    excludes: &[&str],
) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
    {
        let entry = entry
            .map_err(|e| SiteAuditError::walk(root, e.to_string()))
            .with_context(|| format!("Failed to gather {} files from {}", suffix, root.display()))?;

        let matches = entry.file_type().is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix));
        if matches {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), suffix, count = files.len(), "gathered files");
    Ok(files)
}

/// Renders `path` relative to `root` for reports (`styles/a.css`, not `./styles/a.css`).
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("siteaudit_scan_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_gathers_nested_files_in_name_order() {
        let dir = create_temp_dir("nested");
        touch(&dir.join("b.css"));
        touch(&dir.join("a/z.css"));
        touch(&dir.join("a/deep/y.css"));
        touch(&dir.join("a/readme.md"));

        let files = gather_files(&dir, ".css").unwrap();
        let rel: Vec<_> = files.iter().map(|p| display_path(&dir, p)).collect();
        assert_eq!(rel, vec!["a/deep/y.css", "a/z.css", "b.css"]);
    }

    #[test]
    fn test_prunes_hidden_and_node_modules() {
        let dir = create_temp_dir("pruned");
        touch(&dir.join("site.css"));
        touch(&dir.join(".cache/hidden.css"));
        touch(&dir.join("node_modules/pkg/dist.css"));
        touch(&dir.join("assets/node_modules/inner.css"));

        let files = gather_files(&dir, ".css").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("site.css"));
    }

    #[test]
    fn test_hidden_files_are_still_matched() {
        let dir = create_temp_dir("hidden_file");
        touch(&dir.join(".theme.css"));

        let files = gather_files(&dir, ".css").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let dir = create_temp_dir("case");
        touch(&dir.join("upper.CSS"));
        touch(&dir.join("lower.css"));
        touch(&dir.join("scss.scss"));

        let files = gather_files(&dir, ".css").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("lower.css"));
    }

    #[test]
    fn test_extra_excludes() {
        let dir = create_temp_dir("extra");
        touch(&dir.join("keep/a.html"));
        touch(&dir.join("_site/a.html"));

        let files = gather_files_with_excludes(&dir, ".html", &["_site"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep/a.html"));
    }

    #[test]
    fn test_dot_prefixed_root_is_walked() {
        let dir = create_temp_dir("dotroot").join(".site");
        touch(&dir.join("a.css"));

        let files = gather_files(&dir, ".css").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = create_temp_dir("missing").join("does-not-exist");
        assert!(gather_files(&dir, ".css").is_err());
    }
}
