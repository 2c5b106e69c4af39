//! rpcforge Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the rpcforge operation scaffolder,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          rpcforge-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, FacadeResolver)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, TemplateStore, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rpcforge-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (naming, planner, patcher, registry)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rpcforge_core::prelude::*;
//!
//! let spec = MethodSpecification::new("treasurecore", "order", "query", "dev")?;
//! let service = ScaffoldService::new(renderer, filesystem, registry, SourceLayout::default());
//! let report = service.generate(&spec, &ScaffoldOptions::default())?;
//! println!("{} created, {} patched", report.created(), report.patched());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactOutcome, RunReport, ScaffoldOptions, ScaffoldService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, DuplicatePolicy, MethodSpecification, ProjectDescriptor, ProjectRegistry,
        SourceLayout, TemplateContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
