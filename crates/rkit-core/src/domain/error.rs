use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// An unrecognized value was supplied for an enum-valued option.
    ///
    /// Positional arguments must fail loudly rather than silently defaulting;
    /// `expected` lists the accepted spellings for the error message.
    #[error("invalid value '{value}' for {field} (expected one of: {expected})")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid boolean value '{value}' for {field}")]
    InvalidBool { field: &'static str, value: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Template tree '{tree}' has no content")]
    EmptyTemplate { tree: String },

    #[error("Duplicate path in template tree '{tree}': {path}")]
    DuplicatePath { tree: String, path: String },

    #[error("Absolute paths not allowed in template tree '{tree}': {path}")]
    AbsolutePathNotAllowed { tree: String, path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{name}' is invalid: {reason}"),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-app, my_app, demo123".into(),
            ],
            Self::InvalidOption {
                field, expected, ..
            } => vec![
                format!("Accepted values for {field}: {expected}"),
                "Omit the argument to be prompted interactively".into(),
            ],
            Self::InvalidBool { field, .. } => vec![
                format!("Accepted values for {field}: true/false, yes/no, y/n, 1/0"),
                "Omit the argument to be prompted interactively".into(),
            ],
            Self::EmptyTemplate { tree } => vec![
                format!("Template tree '{tree}' is corrupted"),
                "Please report this issue or point RKIT_TEMPLATES_DIR at a valid tree".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidOption { .. }
            | Self::InvalidBool { .. } => ErrorCategory::Validation,
            Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
