//! Core domain layer for rkit.
//!
//! This module contains pure business logic with no I/O. All filesystem,
//! registry, and terminal concerns are handled via ports (traits) defined
//! in the application layer.
//!
//! - **No async**: generation is synchronous end to end
//! - **No external crates**: std + thiserror + serde only
//! - **Immutable values**: an [`OptionSet`] fully determines the plan

pub mod error;
pub mod manifest;
pub mod options;
pub mod plan;
pub mod template;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use manifest::{DependencyKind, Manifest};
pub use options::{OptionSet, ProjectName};
pub use plan::{CompositionPlan, CompositionStep};
pub use template::{
    DirectorySpec, FileSpec, RenderContext, TemplateNode, TemplateSource, TemplateTree,
    TemplateTreeId,
};
pub use value_objects::{DataFetching, StateManagement, UiLibrary, parse_bool_like};
