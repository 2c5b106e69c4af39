//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold one operation".

pub mod facade_resolver;
pub mod report;
pub mod scaffold_service;

pub use facade_resolver::FacadeResolver;
pub use report::{ArtifactOutcome, ArtifactReport, RunReport};
pub use scaffold_service::{ScaffoldOptions, ScaffoldService};
