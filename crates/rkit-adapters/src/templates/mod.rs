//! Template store adapters implementing the `TemplateStore` port.
//!
//! Two implementations:
//! - [`BuiltinStore`] serves the trees compiled into the binary (default)
//! - [`DirStore`] loads trees from a directory on disk, for users who want
//!   to override the shipped boilerplate

pub mod builtin;
pub mod dir_store;

pub use builtin::BuiltinStore;
pub use dir_store::DirStore;
