pub mod method_spec;
pub mod plan;
pub mod project;

pub use method_spec::MethodSpecification;
pub use plan::{ArtifactPlan, ArtifactTarget, DerivedNames, TemplateContext};
pub use project::{ProjectDescriptor, ProjectRegistry};
