//! Application services.

pub mod compose_service;

pub use compose_service::{ComposeService, GenerationReport};
