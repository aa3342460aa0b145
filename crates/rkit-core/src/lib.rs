//! Rkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the rkit
//! React scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            rkit-cli (CLI)               │
//! │   (collects the OptionSet from the      │
//! │    user: arguments or prompts)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │            (ComposeService)             │
//! │    Executes the composition plan        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (TemplateStore, FileEmitter, Resolver)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     rkit-adapters (Infrastructure)      │
//! │ (BuiltinStore, LocalFilesystem,         │
//! │  NpmRegistry, ...)                      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (OptionSet, CompositionPlan, Manifest) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rkit_core::{
//!     application::ComposeService,
//!     domain::{DataFetching, OptionSet, StateManagement, UiLibrary},
//! };
//!
//! // 1. Collect options (normally via CLI arguments or prompts)
//! let options = OptionSet::new(
//!     "demo", UiLibrary::Mui, true, StateManagement::Redux,
//!     DataFetching::None, false,
//! ).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ComposeService::new(store, emitter, resolver);
//! service.generate(&options, "./demo").unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeService, GenerationReport,
        ports::{FileEmitter, TemplateStore, VersionResolver},
    };
    pub use crate::domain::{
        CompositionPlan, CompositionStep, DataFetching, DependencyKind, Manifest, OptionSet,
        ProjectName, RenderContext, StateManagement, TemplateTree, TemplateTreeId, UiLibrary,
    };
    pub use crate::error::{RkitError, RkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
