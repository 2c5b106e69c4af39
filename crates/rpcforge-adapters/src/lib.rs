//! Infrastructure adapters for rpcforge.
//!
//! This crate implements the ports defined in `rpcforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_projects;
pub mod builtin_templates;
pub mod filesystem;
pub mod registry_loader;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem, OverlayFilesystem};
pub use renderer::SimpleRenderer;
pub use template_loader::FilesystemTemplateLoader;
pub use template_store::InMemoryStore;
