//! Unused class and custom-property detection.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │   css.rs     │   │  usage.rs    │
//! │  definitions │   │  references  │
//! └──────┬───────┘   └──────┬───────┘
//!        └────────┬─────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │   AuditGraph    │
//!        │ defined \ used  │
//!        └─────────────────┘
//! ```
//!
//! Stylesheets contribute definitions and variable usages. They are never
//! scanned for class usages: a class in a stylesheet is always a definition.
//!
//! ```rust,ignore
//! use siteaudit_core::prelude::*;
//!
//! let report = CssAudit::new(".").analyze()?;
//! print_plain(&report, CONSOLE_LIMIT);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::css::{extract_definitions, StylesheetDefinitions};
use crate::error::IoResultExt;
use crate::report::{AuditReport, AuditSummary, FileCounts, UnusedEntry};
use crate::scan::{display_path, gather_files_with_excludes};
use crate::usage::{extract_usages, extract_used_variables, UsageResult};

/// Stylesheet suffix.
pub const STYLESHEET_EXT: &str = ".css";

/// Markup and documentation suffixes, scanned in this order.
pub const MARKUP_EXTS: &[&str] = &[".html", ".md"];

/// Defined names with their origin files, and the set of used names.
///
/// Names are kept sorted, so unused lists come out in name order rather than
/// in the order the stylesheets first defined them.
#[derive(Debug, Clone, Default)]
pub struct AuditGraph {
    class_locations: BTreeMap<String, Vec<String>>,
    variable_locations: BTreeMap<String, Vec<String>>,
    used_classes: BTreeSet<String>,
    used_variables: BTreeSet<String>,
}

impl AuditGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what one stylesheet defines. `location` is appended once per name.
    pub fn add_definitions(&mut self, location: &str, defs: StylesheetDefinitions) {
        for class in defs.classes {
            self.class_locations
                .entry(class)
                .or_default()
                .push(location.to_string());
        }
        for var in defs.variables {
            self.variable_locations
                .entry(var)
                .or_default()
                .push(location.to_string());
        }
    }

    /// Record class and variable usages from a markup file.
    pub fn add_usages(&mut self, usage: UsageResult) {
        self.used_classes.extend(usage.classes);
        self.used_variables.extend(usage.variables);
    }

    /// Record variable usages from a stylesheet.
    pub fn add_used_variables(&mut self, vars: BTreeSet<String>) {
        self.used_variables.extend(vars);
    }

    pub fn is_class_used(&self, name: &str) -> bool {
        self.used_classes.contains(name)
    }

    pub fn is_variable_used(&self, name: &str) -> bool {
        self.used_variables.contains(name)
    }

    /// Defined classes that nothing references, sorted by name.
    pub fn unused_classes(&self) -> Vec<UnusedEntry> {
        unused(&self.class_locations, |name| self.is_class_used(name))
    }

    /// Defined variables that nothing references, sorted by name.
    pub fn unused_variables(&self) -> Vec<UnusedEntry> {
        unused(&self.variable_locations, |name| self.is_variable_used(name))
    }

    /// Compute the set differences and counts.
    pub fn analyze(&self) -> AuditReport {
        let unused_classes = self.unused_classes();
        let unused_variables = self.unused_variables();

        let summary = AuditSummary {
            defined_classes: self.class_locations.len(),
            used_classes: self.used_classes.len(),
            unused_classes: unused_classes.len(),
            defined_variables: self.variable_locations.len(),
            used_variables: self.used_variables.len(),
            unused_variables: unused_variables.len(),
        };

        AuditReport {
            summary,
            unused_classes,
            unused_variables,
            files: FileCounts::default(),
        }
    }
}

fn unused(
    locations: &BTreeMap<String, Vec<String>>,
    is_used: impl Fn(&str) -> bool,
) -> Vec<UnusedEntry> {
    locations
        .iter()
        .filter(|(name, _)| !is_used(name.as_str()))
        .map(|(name, files)| UnusedEntry {
            name: name.clone(),
            locations: files.clone(),
        })
        .collect()
}

/// Builder for a CSS audit over a directory tree.
#[derive(Debug, Clone)]
pub struct CssAudit {
    /// Root directory to scan
    root: PathBuf,

    /// Extra directory names to prune
    excluded_dirs: Vec<String>,
}

impl CssAudit {
    /// Create an audit of everything under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: Vec::new(),
        }
    }

    /// Skip directories with these names, on top of hidden dirs and `node_modules`.
    pub fn exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = dirs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the tree and compute unused classes and variables.
    ///
    /// Any walk or read failure aborts the audit.
    pub fn analyze(&self) -> Result<AuditReport> {
        let excludes: Vec<&str> = self.excluded_dirs.iter().map(String::as_str).collect();

        let stylesheets = gather_files_with_excludes(&self.root, STYLESHEET_EXT, &excludes)?;
        let mut markup = Vec::new();
        for ext in MARKUP_EXTS {
            markup.extend(gather_files_with_excludes(&self.root, ext, &excludes)?);
        }
        tracing::info!(
            stylesheets = stylesheets.len(),
            markup = markup.len(),
            "files discovered"
        );

        let mut graph = AuditGraph::new();

        for path in &stylesheets {
            let content = read_text(path)?;
            let location = display_path(&self.root, path);
            tracing::debug!(file = %location, "scanning stylesheet");
            graph.add_definitions(&location, extract_definitions(&content));
            graph.add_used_variables(extract_used_variables(&content));
        }

        for path in &markup {
            let content = read_text(path)?;
            tracing::debug!(file = %path.display(), "scanning markup");
            graph.add_usages(extract_usages(&content));
        }

        let mut report = graph.analyze();
        report.files = FileCounts {
            stylesheets: stylesheets.len(),
            markup: markup.len(),
        };
        Ok(report)
    }
}

/// Reads a file as text, replacing invalid UTF-8 rather than failing.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
