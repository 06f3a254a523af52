//! Configuration loading from siteaudit.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::SiteAuditError;

/// File name looked up in the site root.
pub const CONFIG_FILE: &str = "siteaudit.toml";

/// Main configuration structure for siteaudit.toml.
#[derive(Debug, Deserialize, Default)]
pub struct SiteAuditConfig {
    /// CSS audit settings.
    pub audit: Option<AuditConfig>,
    /// Docket fixer settings.
    pub docket: Option<DocketConfig>,
}

/// `[audit]` table.
#[derive(Debug, Deserialize, Default)]
pub struct AuditConfig {
    /// Extra directory names to skip, on top of hidden dirs and `node_modules`.
    pub exclude_dirs: Option<Vec<String>>,
    /// How many unused names to list per section on the console.
    pub console_limit: Option<usize>,
    /// Report file name, relative to the audited root.
    pub report_file: Option<String>,
}

/// `[docket]` table.
#[derive(Debug, Deserialize, Default)]
pub struct DocketConfig {
    pub legacy_prefix: Option<String>,
    pub corrected_prefix: Option<String>,
}

/// Loads configuration from siteaudit.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<SiteAuditConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cfg = toml::from_str(&content)
        .map_err(|e| SiteAuditError::config(&path, e.message()))
        .context("Invalid siteaudit.toml")?;
    Ok(Some(cfg))
}
