//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`RKIT_REGISTRY`, `RKIT_TEMPLATES_DIR`)
//! 3. Config file (TOML, `--config` or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Default npm registry, same as the adapter's.
pub const DEFAULT_REGISTRY_URL: &str = rkit_adapters::registry::DEFAULT_REGISTRY_URL;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// npm registry settings.
    pub registry: RegistryConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL queried for latest package versions.
    pub url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of template trees overriding the built-in ones.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: file (if present), then environment overrides.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config`; `None` falls back to the default location. A missing
    /// default file is fine; a missing explicit file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, explicit) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        let mut config = if path.is_file() {
            let raw = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
                message: format!("cannot read {}", path.display()),
                source: Some(Box::new(e)),
            })?;
            toml::from_str(&raw).map_err(|e| CliError::ConfigError {
                message: format!("cannot parse {}", path.display()),
                source: Some(Box::new(e)),
            })?
        } else if explicit {
            return Err(CliError::ConfigError {
                message: format!("config file not found: {}", path.display()),
                source: None,
            });
        } else {
            Self::default()
        };

        // Environment overrides beat the file.
        if let Ok(url) = std::env::var("RKIT_REGISTRY") {
            if !url.is_empty() {
                config.registry.url = url;
            }
        }
        if let Ok(dir) = std::env::var("RKIT_TEMPLATES_DIR") {
            if !dir.is_empty() {
                config.templates.dir = Some(PathBuf::from(dir));
            }
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "rkit", "rkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".rkit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_public_npm() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.registry.url, "https://registry.npmjs.org");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[registry]\nurl = \"http://localhost:4873\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.registry.url, "http://localhost:4873");
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.dir.is_none());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
