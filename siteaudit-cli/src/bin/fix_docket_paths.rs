//! fix-docket-paths - rewrite `/assets/cases/` to `/cases/` in docket YAML files.
//!
//! The docket directory is `_data/docket` under the site root. Without
//! `--site-root` the site root is the directory holding this executable.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use siteaudit_core::prelude::*;
use siteaudit_core::{
    fix_docket_files, list_docket_files, DocketConfig, DocketOutcome, CORRECTED_PREFIX,
    LEGACY_PREFIX,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fix legacy document paths in docket YAML files")]
pub struct Cli {
    /// Site root containing _data/docket (default: the executable's directory)
    #[arg(long, value_name = "DIR")]
    site_root: Option<PathBuf>,

    /// Show what would be fixed without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn resolve_site_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable has no parent directory: {}", exe.display()))
}

/// Builds the rewrite from `[docket]` config, defaulting each prefix.
fn path_rewrite(root: &Path) -> Result<PathRewrite> {
    let cfg = match load_config(root) {
        Ok(Some(cfg)) => cfg.docket.unwrap_or_default(),
        Ok(None) => DocketConfig::default(),
        Err(e) => {
            eprintln!("[WARN] config load failed: {:#}", e);
            DocketConfig::default()
        }
    };

    let rewrite = PathRewrite::new(
        cfg.legacy_prefix.unwrap_or_else(|| LEGACY_PREFIX.to_string()),
        cfg.corrected_prefix.unwrap_or_else(|| CORRECTED_PREFIX.to_string()),
    )?;
    Ok(rewrite)
}

fn status_line(outcome: &DocketOutcome, dry_run: bool) -> String {
    match &outcome.status {
        DocketStatus::Fixed if dry_run => format!("~ WOULD FIX: {}", outcome.file),
        DocketStatus::Fixed => format!("✓ FIXED: {}", outcome.file),
        DocketStatus::AlreadyCorrect => format!("  OK: {} (already correct)", outcome.file),
        DocketStatus::Skipped => format!("  SKIP: {} (no file paths found)", outcome.file),
        DocketStatus::Error(message) => format!("✗ ERROR: {} - {}", outcome.file, message),
    }
}

fn print_summary(summary: &DocketSummary, dry_run: bool) {
    let rule = "═".repeat(60);
    println!("\n{}", rule);
    println!("SUMMARY");
    println!("{}", rule);
    println!("Fixed:           {}", summary.fixed);
    println!("Already Correct: {}", summary.already_correct);
    println!("Errors:          {}", summary.errors);
    println!("Total:           {}", summary.total());
    println!("{}\n", rule);

    if summary.fixed > 0 && dry_run {
        println!("Dry run: nothing was written.\n");
    } else if summary.fixed > 0 {
        println!("✓ Changes made. Run git status to review.\n");
    } else {
        println!("No changes needed.\n");
    }
}

fn main() -> Result<()> {
    init_structured_logging();

    let cli = Cli::parse();
    let root = resolve_site_root(cli.site_root)?;
    let rewrite = path_rewrite(&root)?;
    let dir = docket_dir(&root);

    println!("\nFIX ALL DOCKET PDF PATHS");
    println!("{} -> {}\n", rewrite.legacy(), rewrite.corrected());

    let files = list_docket_files(&dir)
        .with_context(|| format!("Docket fix failed in {}", dir.display()))?;
    println!("Found {} docket files\n", files.len());

    let summary = fix_docket_files(&files, &rewrite, cli.dry_run, |outcome| {
        let line = status_line(outcome, cli.dry_run);
        if matches!(outcome.status, DocketStatus::Error(_)) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    });

    print_summary(&summary, cli.dry_run);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("siteaudit_cli_docket_test")
            .join(format!("{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn outcome(file: &str, status: DocketStatus) -> DocketOutcome {
        DocketOutcome {
            file: file.to_string(),
            status,
        }
    }

    #[test]
    fn test_explicit_site_root_wins() {
        let root = resolve_site_root(Some(PathBuf::from("/srv/site"))).unwrap();
        assert_eq!(root, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_default_site_root_is_exe_dir() {
        let root = resolve_site_root(None).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(root.as_path()), exe.parent());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            status_line(&outcome("a.yml", DocketStatus::Fixed), false),
            "✓ FIXED: a.yml"
        );
        assert_eq!(
            status_line(&outcome("a.yml", DocketStatus::Fixed), true),
            "~ WOULD FIX: a.yml"
        );
        assert_eq!(
            status_line(&outcome("b.yml", DocketStatus::AlreadyCorrect), false),
            "  OK: b.yml (already correct)"
        );
        assert_eq!(
            status_line(&outcome("c.yml", DocketStatus::Skipped), false),
            "  SKIP: c.yml (no file paths found)"
        );
        assert_eq!(
            status_line(&outcome("d.yml", DocketStatus::Error("denied".into())), false),
            "✗ ERROR: d.yml - denied"
        );
    }

    #[test]
    fn test_rewrite_defaults_without_config() {
        let root = temp_root("defaults");
        let rewrite = path_rewrite(&root).unwrap();
        assert_eq!(rewrite, PathRewrite::default());
    }

    #[test]
    fn test_rewrite_from_config() {
        let root = temp_root("configured");
        fs::write(
            root.join("siteaudit.toml"),
            "[docket]\nlegacy_prefix = \"/files/cases/\"\n",
        )
        .unwrap();
        let rewrite = path_rewrite(&root).unwrap();
        assert_eq!(rewrite.legacy(), "/files/cases/");
        assert_eq!(rewrite.corrected(), "/cases/");
    }

    #[test]
    fn test_empty_legacy_prefix_is_rejected() {
        let root = temp_root("empty");
        fs::write(root.join("siteaudit.toml"), "[docket]\nlegacy_prefix = \"\"\n").unwrap();
        assert!(path_rewrite(&root).is_err());
    }

    #[test]
    fn test_self_matching_prefixes_are_rejected() {
        let root = temp_root("loop");
        fs::write(
            root.join("siteaudit.toml"),
            "[docket]\nlegacy_prefix = \"/cases/\"\ncorrected_prefix = \"/files/cases/\"\n",
        )
        .unwrap();
        assert!(path_rewrite(&root).is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["fix-docket-paths", "--site-root", "site", "--dry-run"]);
        assert_eq!(cli.site_root, Some(PathBuf::from("site")));
        assert!(cli.dry_run);
    }
}
