//! siteaudit-core: maintenance checks for a static site.
//!
//! Two independent tools share this library:
//!
//! - **CSS audit**: find class selectors and custom properties that stylesheets
//!   define but no markup, Markdown or stylesheet ever references
//! - **Docket path fixer**: rewrite the legacy `/assets/cases/` prefix to
//!   `/cases/` in the YAML records under `_data/docket`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use siteaudit_core::prelude::*;
//!
//! let report = CssAudit::new(".").analyze()?;
//! print_plain(&report, CONSOLE_LIMIT);
//! write_report(Path::new(REPORT_FILE), &report)?;
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: Directory walking with hidden/dependency directory pruning
//! - [`css`]: Class selector and custom-property definitions
//! - [`usage`]: `class="..."` and `var(--x)` references
//! - [`audit`]: Defined-versus-used comparison
//! - [`report`]: Console summary and JSON report
//! - [`docket`]: Legacy path prefix repair
//! - [`config`]: Optional `siteaudit.toml`
//! - [`error`]: Typed error handling

pub mod audit;
pub mod config;
pub mod css;
pub mod docket;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod usage;

// Error types
pub use error::{IoResultExt, SiteAuditError, SiteAuditResult};

// Audit
pub use audit::{AuditGraph, CssAudit, MARKUP_EXTS, STYLESHEET_EXT};

// Configuration
pub use config::{load_config, AuditConfig, DocketConfig, SiteAuditConfig, CONFIG_FILE};

// Extraction
pub use css::{extract_classes, extract_definitions, extract_variables, StylesheetDefinitions};
pub use usage::{extract_usages, extract_used_classes, extract_used_variables, UsageResult};

// Docket fixer
pub use docket::{
    docket_dir, fix_docket_dir, fix_docket_file, fix_docket_files, list_docket_files, DocketOutcome,
    DocketStatus, DocketSummary, PathRewrite, CORRECTED_PREFIX, DOCKET_DIR, LEGACY_PREFIX,
};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{
    print_plain, render_plain, report_json, write_report, AuditReport, AuditSummary,
    FileCounts, UnusedEntry, CONSOLE_LIMIT, REPORT_FILE,
};

// File scanning
pub use scan::{display_path, gather_files, gather_files_with_excludes};
