//! Domain value objects: the three enum-valued generation options.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold no package knowledge; which npm packages a choice pulls in
//! lives in `plan.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! `FromStr` is strict: an unrecognized value is a `DomainError`, never a
//! silent fall-through to `None`. Positional CLI arguments depend on that.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── UiLibrary ────────────────────────────────────────────────────────────────

/// Which component library (if any) to wire into the generated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLibrary {
    Mui,
    Antd,
    None,
}

impl UiLibrary {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mui => "mui",
            Self::Antd => "antd",
            Self::None => "none",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiLibrary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mui" | "material" | "material-ui" => Ok(Self::Mui),
            "antd" | "ant-design" => Ok(Self::Antd),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidOption {
                field: "ui library",
                value: other.into(),
                expected: "mui, antd, none",
            }),
        }
    }
}

// ── StateManagement ──────────────────────────────────────────────────────────

/// Which state-management library (if any) to scaffold a store for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    Redux,
    Jotai,
    None,
}

impl StateManagement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Redux => "redux",
            Self::Jotai => "jotai",
            Self::None => "none",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redux" => Ok(Self::Redux),
            "jotai" => Ok(Self::Jotai),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidOption {
                field: "state management",
                value: other.into(),
                expected: "redux, jotai, none",
            }),
        }
    }
}

// ── DataFetching ─────────────────────────────────────────────────────────────

/// Which data-fetching library (if any) to emit example components for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataFetching {
    ReactQuery,
    Swr,
    None,
}

impl DataFetching {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReactQuery => "react-query",
            Self::Swr => "swr",
            Self::None => "none",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for DataFetching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFetching {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react-query" | "reactquery" | "tanstack" => Ok(Self::ReactQuery),
            "swr" => Ok(Self::Swr),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidOption {
                field: "data fetching",
                value: other.into(),
                expected: "react-query, swr, none",
            }),
        }
    }
}

// ── boolean-like parsing ─────────────────────────────────────────────────────

/// Parse a boolean-like positional argument.
///
/// Accepts the spellings users actually type at a prompt-replacement
/// position: `true/false`, `yes/no`, `y/n`, `1/0`. Anything else errors so
/// an out-of-order argument list fails loudly instead of shifting values.
pub fn parse_bool_like(field: &'static str, s: &str) -> Result<bool, DomainError> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(DomainError::InvalidBool {
            field,
            value: other.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_library_display_is_lowercase() {
        assert_eq!(UiLibrary::Mui.to_string(), "mui");
        assert_eq!(UiLibrary::Antd.to_string(), "antd");
        assert_eq!(UiLibrary::None.to_string(), "none");
    }

    #[test]
    fn ui_library_from_str_accepts_aliases() {
        assert_eq!("material-ui".parse::<UiLibrary>().unwrap(), UiLibrary::Mui);
        assert_eq!("ant-design".parse::<UiLibrary>().unwrap(), UiLibrary::Antd);
        assert_eq!("MUI".parse::<UiLibrary>().unwrap(), UiLibrary::Mui);
    }

    #[test]
    fn unknown_ui_library_errors_instead_of_defaulting() {
        assert!(matches!(
            "chakra".parse::<UiLibrary>(),
            Err(DomainError::InvalidOption { field: "ui library", .. })
        ));
        assert!("".parse::<UiLibrary>().is_err());
    }

    #[test]
    fn state_management_from_str() {
        assert_eq!(
            "redux".parse::<StateManagement>().unwrap(),
            StateManagement::Redux
        );
        assert_eq!(
            "jotai".parse::<StateManagement>().unwrap(),
            StateManagement::Jotai
        );
        assert!("mobx".parse::<StateManagement>().is_err());
    }

    #[test]
    fn data_fetching_from_str_accepts_aliases() {
        assert_eq!(
            "reactquery".parse::<DataFetching>().unwrap(),
            DataFetching::ReactQuery
        );
        assert_eq!(
            "tanstack".parse::<DataFetching>().unwrap(),
            DataFetching::ReactQuery
        );
        assert_eq!("SWR".parse::<DataFetching>().unwrap(), DataFetching::Swr);
        assert!("axios".parse::<DataFetching>().is_err());
    }

    #[test]
    fn is_none_only_for_none_variant() {
        assert!(UiLibrary::None.is_none());
        assert!(!UiLibrary::Mui.is_none());
        assert!(StateManagement::None.is_none());
        assert!(!StateManagement::Jotai.is_none());
        assert!(DataFetching::None.is_none());
        assert!(!DataFetching::Swr.is_none());
    }

    #[test]
    fn bool_like_accepts_common_spellings() {
        for s in ["true", "yes", "y", "1", "TRUE", "Yes"] {
            assert!(parse_bool_like("router", s).unwrap(), "failed for {s}");
        }
        for s in ["false", "no", "n", "0", "FALSE"] {
            assert!(!parse_bool_like("router", s).unwrap(), "failed for {s}");
        }
    }

    #[test]
    fn bool_like_rejects_garbage() {
        assert!(matches!(
            parse_bool_like("storybook", "maybe"),
            Err(DomainError::InvalidBool { field: "storybook", .. })
        ));
    }
}
