//! Application layer errors.
//!
//! These errors represent orchestration failures, not business-rule
//! violations (those are `DomainError` from `crate::domain`). All of them
//! are fatal: the run terminates and any partially written tree is left for
//! the caller to discard.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateTreeId;
use crate::error::ErrorCategory;

/// Errors that occur while executing a composition plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A step referenced a template tree the store cannot provide.
    #[error("template tree '{tree}' not found in store")]
    MissingTemplate { tree: TemplateTreeId },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Target project directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTemplate { tree } => vec![
                format!("The '{tree}' template tree is missing"),
                "If RKIT_TEMPLATES_DIR is set, check that directory's layout".into(),
                "Unset RKIT_TEMPLATES_DIR to use the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partially written files are not cleaned up; remove the target directory before retrying".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
