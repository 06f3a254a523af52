//! Typed error handling for siteaudit.
//!
//! Library operations that touch a single file report a [`SiteAuditError`] so
//! callers can tell which path failed; whole-run orchestration wraps these in
//! `anyhow` with additional context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for siteaudit operations.
#[derive(Error, Debug)]
pub enum SiteAuditError {
    /// I/O error when reading/writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Directory traversal failed part-way
    #[error("Walk error under {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Audit report could not be serialized
    #[error("Report error: {message}")]
    Report { message: String },
}

impl SiteAuditError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a walk error.
    pub fn walk(root: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Walk {
            root: root.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a report error.
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// The underlying message without the path prefix.
    ///
    /// The docket fixer prints this next to the file name.
    pub fn message(&self) -> &str {
        match self {
            Self::Io { message, .. }
            | Self::Walk { message, .. }
            | Self::Config { message, .. }
            | Self::Report { message } => message,
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Walk { root, .. } => Some(root),
            Self::Config { path, .. } => Some(path),
            Self::Report { .. } => None,
        }
    }
}

/// Convenience type alias for siteaudit results.
pub type SiteAuditResult<T> = Result<T, SiteAuditError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> SiteAuditResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> SiteAuditResult<T> {
        self.map_err(|e| SiteAuditError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = SiteAuditError::io(
            PathBuf::from("/site/_data/docket/a.yml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, SiteAuditError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/site/_data/docket/a.yml")));
        assert!(err.to_string().contains("/site/_data/docket/a.yml"));
        assert_eq!(err.message(), "file not found");
    }

    #[test]
    fn test_report_error_has_no_path() {
        let err = SiteAuditError::report("bad float");
        assert!(err.path().is_none());
        assert_eq!(err.to_string(), "Report error: bad float");
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let err = result.with_path("/locked.yml").unwrap_err();
        assert_eq!(err.path(), Some(&PathBuf::from("/locked.yml")));
    }
}
