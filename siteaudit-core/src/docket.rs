//! Docket path repair.
//!
//! Rewrites the legacy `/assets/cases/` prefix to `/cases/` in the YAML records
//! under `_data/docket`, in place.
//!
//! Features:
//! - Per-file classification: fixed, already correct, skipped, error
//! - Per-file isolation: a read/write failure is recorded and the run continues
//! - Dry-run support
//! - Idempotent: a second run finds nothing to fix

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::{IoResultExt, SiteAuditError, SiteAuditResult};

/// Docket directory, relative to the site root.
pub const DOCKET_DIR: &str = "_data/docket";

/// Obsolete document prefix.
pub const LEGACY_PREFIX: &str = "/assets/cases/";

/// Replacement prefix.
pub const CORRECTED_PREFIX: &str = "/cases/";

const DOCKET_EXTS: &[&str] = &[".yml", ".yaml"];

/// A literal prefix substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewrite {
    legacy: String,
    corrected: String,
}

impl Default for PathRewrite {
    fn default() -> Self {
        Self {
            legacy: LEGACY_PREFIX.to_string(),
            corrected: CORRECTED_PREFIX.to_string(),
        }
    }
}

impl PathRewrite {
    /// Create a rewrite.
    ///
    /// The legacy prefix must be non-empty and must not occur inside the
    /// corrected prefix, otherwise every run would rewrite the file again.
    pub fn new(legacy: impl Into<String>, corrected: impl Into<String>) -> SiteAuditResult<Self> {
        let legacy = legacy.into();
        let corrected = corrected.into();
        if legacy.is_empty() {
            return Err(SiteAuditError::config(
                crate::config::CONFIG_FILE,
                "legacy_prefix must not be empty",
            ));
        }
        if corrected.contains(&legacy) {
            return Err(SiteAuditError::config(
                crate::config::CONFIG_FILE,
                format!(
                    "corrected_prefix {:?} contains legacy_prefix {:?}",
                    corrected, legacy
                ),
            ));
        }
        Ok(Self { legacy, corrected })
    }

    pub fn legacy(&self) -> &str {
        &self.legacy
    }

    pub fn corrected(&self) -> &str {
        &self.corrected
    }

    /// Classify `content` and return the rewritten text when a fix applies.
    pub fn apply(&self, content: &str) -> (DocketStatus, Option<String>) {
        if content.contains(&self.legacy) {
            (
                DocketStatus::Fixed,
                Some(content.replace(&self.legacy, &self.corrected)),
            )
        } else if content.contains(&self.corrected) {
            (DocketStatus::AlreadyCorrect, None)
        } else {
            (DocketStatus::Skipped, None)
        }
    }
}

/// What happened to a single docket file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocketStatus {
    /// Legacy prefix found and replaced
    Fixed,
    /// Only the corrected prefix present
    AlreadyCorrect,
    /// Neither prefix present
    Skipped,
    /// Read or write failed; holds the error message
    Error(String),
}

/// A file name and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocketOutcome {
    pub file: String,
    pub status: DocketStatus,
}

/// Result of a fixer run.
#[derive(Debug, Clone, Default)]
pub struct DocketSummary {
    pub outcomes: Vec<DocketOutcome>,
    pub fixed: usize,
    pub already_correct: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl DocketSummary {
    fn record(&mut self, file: String, status: DocketStatus) -> &DocketOutcome {
        match &status {
            DocketStatus::Fixed => self.fixed += 1,
            DocketStatus::AlreadyCorrect => self.already_correct += 1,
            DocketStatus::Skipped => self.skipped += 1,
            DocketStatus::Error(_) => self.errors += 1,
        }
        self.outcomes.push(DocketOutcome { file, status });
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Number of docket files found.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// `<site_root>/_data/docket`.
pub fn docket_dir(site_root: &Path) -> PathBuf {
    site_root.join(DOCKET_DIR)
}

/// Lists `.yml`/`.yaml` entries directly inside `dir`, sorted by name.
///
/// Not recursive. Failure to read the directory itself is fatal.
pub fn list_docket_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_path(dir)
        .with_context(|| format!("Failed to list docket directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_path(dir)?;
        let is_docket = entry
            .file_name()
            .to_str()
            .is_some_and(|name| DOCKET_EXTS.iter().any(|ext| name.ends_with(ext)));
        if is_docket {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Classify one docket file and rewrite it in place when it holds the legacy prefix.
///
/// In dry-run mode nothing is written, but the status is the same.
pub fn fix_docket_file(
    path: &Path,
    rewrite: &PathRewrite,
    dry_run: bool,
) -> SiteAuditResult<DocketStatus> {
    let content = fs::read_to_string(path).with_path(path)?;

    let (status, new_content) = rewrite.apply(&content);
    if let Some(new_content) = new_content {
        if dry_run {
            tracing::info!(file = %path.display(), "dry run, would rewrite");
        } else {
            fs::write(path, new_content).with_path(path)?;
            tracing::info!(file = %path.display(), "rewrote legacy prefix");
        }
    }

    Ok(status)
}

/// Process every docket file in `dir`, isolating per-file failures.
pub fn fix_docket_dir(
    dir: &Path,
    rewrite: &PathRewrite,
    dry_run: bool,
) -> Result<DocketSummary> {
    let files = list_docket_files(dir)?;
    Ok(fix_docket_files(&files, rewrite, dry_run, |_| {}))
}

/// Process `files` in order, calling `on_outcome` as each one finishes.
///
/// A read or write failure becomes an [`DocketStatus::Error`] outcome and the
/// remaining files are still processed.
pub fn fix_docket_files(
    files: &[PathBuf],
    rewrite: &PathRewrite,
    dry_run: bool,
    mut on_outcome: impl FnMut(&DocketOutcome),
) -> DocketSummary {
    let mut summary = DocketSummary::default();

    for path in files {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let status = match fix_docket_file(path, rewrite, dry_run) {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(file = %file, error = %e, "docket file failed");
                DocketStatus::Error(e.message().to_string())
            }
        };
        let outcome = summary.record(file, status);
        on_outcome(outcome);
    }

    summary
}
