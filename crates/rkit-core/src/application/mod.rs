//! Application layer - use case orchestration.
//!
//! Coordinates domain logic with infrastructure through ports. Services in
//! this layer own the driven ports as boxed trait objects and contain no
//! I/O of their own.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ComposeService, GenerationReport};
