//! Infrastructure adapters for rkit.
//!
//! This crate implements the ports defined in `rkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod registry;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::{FixedVersions, NpmRegistry};
pub use templates::{BuiltinStore, DirStore};
