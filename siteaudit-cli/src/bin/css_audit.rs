//! css-audit - report stylesheet classes and custom properties that nothing uses.
//!
//! Scans the site root for `.css`, `.html` and `.md` files, prints a summary
//! with the first unused names, and writes the full list to
//! `css-audit-report.json`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use siteaudit_core::prelude::*;
use siteaudit_core::AuditConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find unused CSS classes and custom properties")]
pub struct Cli {
    /// Root directory of the site
    #[arg(default_value = ".")]
    path: String,

    /// How many unused names to list per section
    #[arg(long)]
    limit: Option<usize>,

    /// Report file name, relative to the site root
    #[arg(long, value_name = "FILE")]
    report: Option<String>,
}

/// Reads the `[audit]` table, falling back to defaults on a missing or broken config.
fn audit_config(root: &Path) -> AuditConfig {
    match load_config(root) {
        Ok(Some(cfg)) => cfg.audit.unwrap_or_default(),
        Ok(None) => AuditConfig::default(),
        Err(e) => {
            eprintln!("[WARN] config load failed: {:#}", e);
            AuditConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_structured_logging();

    let cli = Cli::parse();
    let root = PathBuf::from(&cli.path);
    let cfg = audit_config(&root);

    let limit = cli.limit.or(cfg.console_limit).unwrap_or(CONSOLE_LIMIT);
    let report_file = cli
        .report
        .or(cfg.report_file)
        .unwrap_or_else(|| REPORT_FILE.to_string());

    println!("🔍 Starting CSS Audit...\n");

    let audit = CssAudit::new(root).exclude_dirs(cfg.exclude_dirs.unwrap_or_default());
    let report = audit
        .analyze()
        .with_context(|| format!("CSS audit failed under {}", audit.root().display()))?;

    println!("📁 Found {} CSS files", report.files.stylesheets);
    println!("📁 Found {} HTML/MD files\n", report.files.markup);

    print_plain(&report, limit);

    write_report(&audit.root().join(&report_file), &report)
        .with_context(|| format!("Failed to write {}", report_file))?;
    println!("💾 Detailed report saved to {}", report_file);

    Ok(())
}
