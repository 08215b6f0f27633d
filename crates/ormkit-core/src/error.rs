//! Unified error handling for Ormkit Core.
//!
//! Only failures that the caller must see live here. Connection-config
//! lookup failures are a separate type ([`crate::domain::ConnectionConfigError`])
//! because the service recovers from them locally.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Ormkit Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Writing the generated file failed (missing directory, permissions,
    /// disk full, ...).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => {
                let mut out = vec![format!("Failed to write: {}", path.display())];
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    out.push(format!(
                        "Ensure the directory exists (it is not created automatically): mkdir -p {}",
                        parent.display()
                    ));
                }
                out.push("Check that you have write permissions".into());
                out
            }
            Self::Internal { .. } => vec![
                "This appears to be a bug in ormkit".into(),
                "Please report this issue at: https://github.com/cosecruz/ormkit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_suggestions_mention_missing_directory() {
        let err = CoreError::Filesystem {
            path: PathBuf::from("/project/out/Foo.ts"),
            reason: "No such file or directory".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("mkdir -p /project/out")));
    }

    #[test]
    fn filesystem_error_display_includes_path() {
        let err = CoreError::Filesystem {
            path: PathBuf::from("out/Foo.ts"),
            reason: "denied".into(),
        };
        assert_eq!(err.to_string(), "Filesystem error at out/Foo.ts: denied");
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }
}
