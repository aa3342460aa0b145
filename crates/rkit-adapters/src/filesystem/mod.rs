//! Filesystem adapters implementing the `FileEmitter` port.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
