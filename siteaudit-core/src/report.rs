//! Output formatting - console summary and JSON report file.
//!
//! The console listing is truncated for readability; the JSON file always
//! carries every unused entry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, SiteAuditError, SiteAuditResult};

/// Default report file name, relative to the audited root.
pub const REPORT_FILE: &str = "css-audit-report.json";

/// Default number of unused names listed per section on the console.
pub const CONSOLE_LIMIT: usize = 50;

/// Counts of defined, used and unused names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub defined_classes: usize,
    pub used_classes: usize,
    pub unused_classes: usize,
    pub defined_variables: usize,
    pub used_variables: usize,
    pub unused_variables: usize,
}

/// A defined-but-unused class or variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedEntry {
    pub name: String,
    /// Stylesheets that define the name, relative to the audited root
    pub locations: Vec<String>,
}

/// How many files each scan pass looked at. Console only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub stylesheets: usize,
    pub markup: usize,
}

/// Full audit result, serialized as the JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub unused_classes: Vec<UnusedEntry>,
    pub unused_variables: Vec<UnusedEntry>,
    #[serde(skip)]
    pub files: FileCounts,
}

/// Renders the console summary, listing at most `limit` entries per section.
pub fn render_plain(report: &AuditReport, limit: usize) -> String {
    let s = &report.summary;
    let mut out = String::new();

    out.push_str("📊 AUDIT RESULTS\n\n");
    out.push_str(&format!("✅ Defined Classes: {}\n", s.defined_classes));
    out.push_str(&format!("✅ Used Classes: {}\n", s.used_classes));
    out.push_str(&format!("❌ Unused Classes: {}\n\n", s.unused_classes));
    out.push_str(&format!("✅ Defined Variables: {}\n", s.defined_variables));
    out.push_str(&format!("✅ Used Variables: {}\n", s.used_variables));
    out.push_str(&format!("❌ Unused Variables: {}\n\n", s.unused_variables));

    if !report.unused_classes.is_empty() {
        out.push_str(&format!("🗑️  UNUSED CLASSES (first {}):\n", limit));
        for entry in report.unused_classes.iter().take(limit) {
            out.push_str(&format!(
                "  .{} - in {} file(s)\n",
                entry.name,
                entry.locations.len()
            ));
        }
        out.push('\n');
    }

    if !report.unused_variables.is_empty() {
        out.push_str(&format!("🗑️  UNUSED VARIABLES (first {}):\n", limit));
        for entry in report.unused_variables.iter().take(limit) {
            out.push_str(&format!(
                "  {} - in {} file(s)\n",
                entry.name,
                entry.locations.len()
            ));
        }
        out.push('\n');
    }

    out
}

/// Prints the console summary to stdout.
pub fn print_plain(report: &AuditReport, limit: usize) {
    print!("{}", render_plain(report, limit));
}

/// Serializes the full report as 2-space indented JSON.
pub fn report_json(report: &AuditReport) -> SiteAuditResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| SiteAuditError::report(e.to_string()))
}

/// Writes the full report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &AuditReport) -> SiteAuditResult<()> {
    let json = report_json(report)?;
    fs::write(path, json).with_path(path)?;
    tracing::info!(path = %path.display(), "audit report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, locations: &[&str]) -> UnusedEntry {
        UnusedEntry {
            name: name.to_string(),
            locations: locations.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> AuditReport {
        AuditReport {
            summary: AuditSummary {
                defined_classes: 2,
                used_classes: 3,
                unused_classes: 1,
                defined_variables: 1,
                used_variables: 0,
                unused_variables: 1,
            },
            unused_classes: vec![entry("ghost", &["css/a.css", "css/b.css"])],
            unused_variables: vec![entry("--gap", &["css/a.css"])],
            files: FileCounts::default(),
        }
    }

    #[test]
    fn test_json_schema_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&report_json(&sample()).unwrap()).unwrap();

        let summary = &json["summary"];
        for key in [
            "definedClasses",
            "usedClasses",
            "unusedClasses",
            "definedVariables",
            "usedVariables",
            "unusedVariables",
        ] {
            assert!(summary[key].is_u64(), "missing summary.{}", key);
        }
        assert_eq!(json["unusedClasses"][0]["name"], "ghost");
        assert_eq!(json["unusedClasses"][0]["locations"][1], "css/b.css");
        assert_eq!(json["unusedVariables"][0]["name"], "--gap");
        assert!(json.get("files").is_none());
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let json = report_json(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"summary\": {\n    \"definedClasses\": 2,"));
    }

    #[test]
    fn test_render_plain_lines() {
        let text = render_plain(&sample(), CONSOLE_LIMIT);
        assert!(text.contains("❌ Unused Classes: 1\n"));
        assert!(text.contains("  .ghost - in 2 file(s)\n"));
        assert!(text.contains("  --gap - in 1 file(s)\n"));
    }

    #[test]
    fn test_render_plain_truncates_but_json_does_not() {
        let mut report = sample();
        report.unused_classes = (0..60)
            .map(|i| entry(&format!("c{:02}", i), &["a.css"]))
            .collect();
        report.summary.unused_classes = 60;

        let text = render_plain(&report, CONSOLE_LIMIT);
        assert!(text.contains("  .c49 - in 1 file(s)"));
        assert!(!text.contains("  .c50 - in"));

        let json: serde_json::Value =
            serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert_eq!(json["unusedClasses"].as_array().unwrap().len(), 60);
    }

    #[test]
    fn test_render_plain_skips_empty_sections() {
        let text = render_plain(&AuditReport::default(), CONSOLE_LIMIT);
        assert!(!text.contains("UNUSED CLASSES"));
        assert!(!text.contains("UNUSED VARIABLES"));
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = std::env::temp_dir()
            .join("siteaudit_report_test")
            .join(format!("overwrite_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(REPORT_FILE);
        fs::write(&path, "stale contents that are much longer than nothing").unwrap();

        write_report(&path, &AuditReport::default()).unwrap();
        let back: AuditReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, AuditReport::default());
    }

    #[test]
    fn test_write_report_to_missing_dir_fails() {
        let path = std::env::temp_dir()
            .join("siteaudit_report_test")
            .join("no")
            .join("such")
            .join(REPORT_FILE);
        let err = write_report(&path, &AuditReport::default()).unwrap_err();
        assert!(matches!(err, SiteAuditError::Io { .. }));
    }
}
