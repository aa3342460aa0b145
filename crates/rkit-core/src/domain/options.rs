//! The resolved user configuration driving a generation run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{DataFetching, StateManagement, UiLibrary},
};

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariants, enforced at construction:
/// - non-empty
/// - no path separators (the name becomes a directory leaf)
/// - does not start with `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot contain path separators".into(),
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot start with '.'".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── OptionSet ────────────────────────────────────────────────────────────────

/// The full answer set collected by the CLI.
///
/// A single flat record; immutable once built. Generation output is a pure
/// function of this value (modulo resolved version strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub name: ProjectName,
    pub ui_library: UiLibrary,
    pub router: bool,
    pub state_management: StateManagement,
    pub data_fetching: DataFetching,
    pub storybook: bool,
}

impl OptionSet {
    /// Build an option set, validating the project name.
    pub fn new(
        name: impl Into<String>,
        ui_library: UiLibrary,
        router: bool,
        state_management: StateManagement,
        data_fetching: DataFetching,
        storybook: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: ProjectName::new(name)?,
            ui_library,
            router,
            state_management,
            data_fetching,
            storybook,
        })
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ui={}, router={}, state={}, fetch={}, storybook={})",
            self.name,
            self.ui_library,
            self.router,
            self.state_management,
            self.data_fetching,
            self.storybook
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["my-app", "my_app", "demo123", "MyApp"] {
            assert!(ProjectName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ProjectName::new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(ProjectName::new("   ").is_err());
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(ProjectName::new(".hidden").is_err());
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\\b").is_err());
    }

    #[test]
    fn option_set_construction_validates_name() {
        let err = OptionSet::new(
            "",
            UiLibrary::None,
            false,
            StateManagement::None,
            DataFetching::None,
            false,
        );
        assert!(err.is_err());

        let ok = OptionSet::new(
            "demo",
            UiLibrary::Mui,
            true,
            StateManagement::Redux,
            DataFetching::None,
            false,
        )
        .unwrap();
        assert_eq!(ok.name.as_str(), "demo");
        assert!(ok.router);
    }
}
