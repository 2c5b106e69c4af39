//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::services::RunReport;
use crate::domain::{ArtifactKind, DomainError};
use crate::error::{ErrorCategory, ForgeError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The directory that should hold the project's interfaces is absent.
    #[error("Facade directory does not exist: {}", path.display())]
    FacadeDirectoryMissing { path: PathBuf },

    /// No template registered under the id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template rendering failed.
    #[error("Template rendering failed for '{id}': {reason}")]
    RenderingFailed { id: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Patching an existing hand-written file failed; the run stops here.
    #[error("Failed to patch {artifact} at {}: {source}", path.display())]
    PatchFailed {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// A patch step failed after earlier artifacts were written.
    /// `report` lists what the run did up to that point.
    #[error("Run stopped: {source}")]
    RunAborted {
        report: Box<RunReport>,
        #[source]
        source: Box<ForgeError>,
    },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FacadeDirectoryMissing { path } => vec![
                format!("Expected interfaces under: {}", path.display()),
                "Run from the repository root or pass --root".into(),
                "Check the project id and [layout] settings".into(),
            ],
            Self::TemplateNotFound { id } => vec![
                format!("No template named '{id}'"),
                "Run 'rpcforge templates' to list available templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PatchFailed { source, .. } => {
                let mut hints = vec!["The file was left unchanged".into()];
                hints.extend(source.suggestions());
                hints
            }
            Self::RunAborted { source, .. } => {
                let mut hints = source.suggestions();
                hints.push("Files written before the failure are listed in the report".into());
                hints
            }
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the template syntax".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FacadeDirectoryMissing { .. } => ErrorCategory::Configuration,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::PatchFailed { source, .. } => match source.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Structural => ErrorCategory::Structural,
            },
            Self::RunAborted { source, .. } => source.category(),
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
