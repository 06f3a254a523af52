//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use siteaudit_core::prelude::*;
//! ```

pub use crate::error::{SiteAuditError, SiteAuditResult};

// CSS audit
pub use crate::audit::CssAudit;
pub use crate::report::{print_plain, write_report, AuditReport, CONSOLE_LIMIT, REPORT_FILE};

// Docket fixer
pub use crate::docket::{docket_dir, fix_docket_dir, DocketStatus, DocketSummary, PathRewrite};

// Configuration and logging
pub use crate::config::{load_config, SiteAuditConfig};
pub use crate::logging::init_structured_logging;
