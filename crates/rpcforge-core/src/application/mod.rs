//! Application layer for rpcforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FacadeResolver)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming and patching rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactOutcome, ArtifactReport, FacadeResolver, RunReport, ScaffoldOptions, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateEntry, TemplateOrigin, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
