//! Unified error handling for rpcforge core.
//!
//! Wraps domain and application errors behind one type with user-actionable
//! suggestions and a display category.

use thiserror::Error;

use crate::application::{ApplicationError, RunReport};
use crate::domain::DomainError;

/// Root error type for rpcforge core operations.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Invalid input or a patch anchor problem.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failures (missing directories, I/O, templates).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ForgeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The report of a run that stopped part way, if this error carries one.
    pub fn partial_report(&self) -> Option<&RunReport> {
        match self {
            Self::Application(ApplicationError::RunAborted { report, .. }) => Some(report.as_ref()),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run 'rpcforge config list' to inspect the effective configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in rpcforge".into(),
                "Re-run with -vvv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Structural => ErrorCategory::Structural,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    /// An existing file lacks the anchor a patch needs.
    Structural,
    Internal,
}

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> ForgeResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> ForgeResult<T> {
        self.map_err(|e| ForgeError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
