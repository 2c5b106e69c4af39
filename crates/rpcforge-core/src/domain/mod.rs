//! Core domain layer for rpcforge.
//!
//! Pure logic only: naming, planning, facade inspection and text patching.
//! All I/O goes through the ports in `crate::application`.
//!
//! - **No I/O**: functions take text and return text
//! - **Deterministic**: no clocks or randomness (the run date is passed in)
//! - **Immutable inputs**: entities are `Clone + PartialEq`

pub mod entities;
pub mod error;
pub mod facade;
pub mod layout;
pub mod naming;
pub mod patch;
pub mod planner;
pub mod value_objects;

mod validation;

pub use entities::{
    ArtifactPlan, ArtifactTarget, DerivedNames, MethodSpecification, ProjectDescriptor,
    ProjectRegistry, TemplateContext,
};
pub use error::{DomainError, ErrorCategory};
pub use facade::{FacadeMatch, FacadeResolution};
pub use layout::{ModuleRoot, SourceLayout};
pub use patch::{Declaration, PatchOutcome, SourcePatcher};
pub use planner::ArtifactPlanner;
pub use value_objects::{ArtifactKind, DuplicatePolicy};

pub use validation::InputValidator;
