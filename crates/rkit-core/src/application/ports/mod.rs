//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rkit-adapters` crate provides implementations.

use std::path::Path;

use tracing::warn;

use crate::domain::{TemplateTree, TemplateTreeId};
use crate::error::RkitResult;

/// The literal version string recorded when a registry lookup fails.
///
/// The swallow-and-default policy is deliberate product behavior: a flaky
/// registry must never block generation. The cost is reproducibility — two
/// runs at different times may pin different versions.
pub const FALLBACK_VERSION: &str = "latest";

/// Port for writing the generated project tree.
///
/// Implemented by:
/// - `rkit_adapters::filesystem::LocalFilesystem` (production)
/// - `rkit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait FileEmitter: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RkitResult<()>;

    /// Write content to a file, replacing any previous content. Later
    /// composition steps may overwrite files emitted by earlier ones.
    fn write_file(&self, path: &Path, content: &str) -> RkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents (used only by `--force`).
    fn remove_dir_all(&self, path: &Path) -> RkitResult<()>;
}

/// Port for template tree retrieval.
///
/// Implemented by:
/// - `rkit_adapters::templates::BuiltinStore` (compiled-in trees, default)
/// - `rkit_adapters::templates::DirStore` (filesystem trees)
pub trait TemplateStore: Send + Sync {
    /// Fetch a tree by id. A missing tree is a fatal generation error.
    fn get(&self, id: TemplateTreeId) -> RkitResult<TemplateTree>;
}

/// A registry lookup failure. Never escapes [`VersionResolver::resolve_or_latest`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("version lookup for '{package}' failed: {reason}")]
pub struct ResolveError {
    pub package: String,
    pub reason: String,
}

/// Port for resolving the latest published version of an npm package.
///
/// Implemented by:
/// - `rkit_adapters::registry::NpmRegistry` (HTTP, production)
/// - `rkit_adapters::registry::FixedVersions` (in-memory, tests/offline)
pub trait VersionResolver: Send + Sync {
    /// Query the registry for the latest version of `package`.
    fn latest(&self, package: &str) -> Result<String, ResolveError>;

    /// Resolve with the named fallback policy: any failure degrades to
    /// [`FALLBACK_VERSION`] for that package only, logged at WARN and never
    /// surfaced to the caller.
    fn resolve_or_latest(&self, package: &str) -> String {
        match self.latest(package) {
            Ok(version) => version,
            Err(e) => {
                warn!(package, error = %e, "version lookup failed, pinning '{FALLBACK_VERSION}'");
                FALLBACK_VERSION.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;
    impl VersionResolver for AlwaysFails {
        fn latest(&self, package: &str) -> Result<String, ResolveError> {
            Err(ResolveError {
                package: package.into(),
                reason: "offline".into(),
            })
        }
    }

    struct OnlyReact;
    impl VersionResolver for OnlyReact {
        fn latest(&self, package: &str) -> Result<String, ResolveError> {
            if package == "react" {
                Ok("19.0.0".into())
            } else {
                Err(ResolveError {
                    package: package.into(),
                    reason: "not found".into(),
                })
            }
        }
    }

    #[test]
    fn failure_degrades_to_latest() {
        assert_eq!(AlwaysFails.resolve_or_latest("react"), FALLBACK_VERSION);
    }

    #[test]
    fn fallback_is_per_package_not_per_run() {
        let r = OnlyReact;
        assert_eq!(r.resolve_or_latest("react"), "19.0.0");
        assert_eq!(r.resolve_or_latest("react-dom"), FALLBACK_VERSION);
        // a failure for one package must not poison later lookups
        assert_eq!(r.resolve_or_latest("react"), "19.0.0");
    }
}
