//! npm registry adapters implementing the `VersionResolver` port.
//!
//! The production adapter asks the registry's `/{package}/latest` endpoint
//! for the current version. Lookup failures are reported as `ResolveError`;
//! the fallback-to-`latest` policy lives in the port's provided method, not
//! here.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use rkit_core::application::ports::{ResolveError, VersionResolver};

/// Default public npm registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, serde::Deserialize)]
struct PackageVersion {
    version: String,
}

/// HTTP client for the npm registry.
#[derive(Debug)]
pub struct NpmRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl NpmRegistry {
    /// Create a client for the given registry base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Client for the public npm registry.
    pub fn public() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }

    fn lookup_url(&self, package: &str) -> String {
        // Scoped package names contain a '/' that must be percent-encoded
        // ("@scope/name" -> "@scope%2Fname").
        let encoded = package.replace('/', "%2F");
        format!("{}/{}/latest", self.base_url, encoded)
    }
}

impl VersionResolver for NpmRegistry {
    fn latest(&self, package: &str) -> Result<String, ResolveError> {
        let url = self.lookup_url(package);
        debug!(package, %url, "querying registry");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ResolveError {
                package: package.into(),
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError {
                package: package.into(),
                reason: format!("registry returned {status}"),
            });
        }

        let parsed: PackageVersion = response.json().map_err(|e| ResolveError {
            package: package.into(),
            reason: format!("invalid response body: {e}"),
        })?;

        debug!(package, version = %parsed.version, "resolved");
        Ok(parsed.version)
    }
}

/// In-memory resolver for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct FixedVersions {
    versions: HashMap<String, String>,
}

impl FixedVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, package: impl Into<String>, version: impl Into<String>) -> Self {
        self.versions.insert(package.into(), version.into());
        self
    }
}

impl VersionResolver for FixedVersions {
    fn latest(&self, package: &str) -> Result<String, ResolveError> {
        self.versions
            .get(package)
            .cloned()
            .ok_or_else(|| ResolveError {
                package: package.into(),
                reason: "no fixed version configured".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkit_core::application::ports::FALLBACK_VERSION;

    #[test]
    fn scoped_package_names_are_encoded() {
        let registry = NpmRegistry::new("https://registry.example.com/");
        assert_eq!(
            registry.lookup_url("@mui/material"),
            "https://registry.example.com/@mui%2Fmaterial/latest"
        );
        assert_eq!(
            registry.lookup_url("react"),
            "https://registry.example.com/react/latest"
        );
    }

    #[test]
    fn unreachable_registry_degrades_to_fallback() {
        // discard port on loopback, connection is refused immediately
        let registry = NpmRegistry::new("http://127.0.0.1:9");
        assert!(registry.latest("react").is_err());
        assert_eq!(registry.resolve_or_latest("react"), FALLBACK_VERSION);
    }

    #[test]
    fn fixed_versions_resolve_configured_packages_only() {
        let resolver = FixedVersions::new().with("react", "19.0.0");
        assert_eq!(resolver.latest("react").unwrap(), "19.0.0");
        assert!(resolver.latest("react-dom").is_err());
        assert_eq!(resolver.resolve_or_latest("react-dom"), FALLBACK_VERSION);
    }
}
