// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be stored in a run report)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    #[error("Unknown duplicate policy: {0}")]
    UnknownDuplicatePolicy(String),

    // ========================================================================
    // Structural Errors (patching anchors)
    // ========================================================================
    #[error("source has no closing '{delimiter}' to insert before")]
    MissingClosingScope { delimiter: char },

    #[error("source has no 'package' statement to anchor imports")]
    MissingPackageHeader,

    #[error("declaration '{probe}' is already present")]
    DuplicateDeclaration { probe: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                "All of project, path, method and author are required".into(),
            ],
            Self::InvalidField { field, .. } => vec![
                format!("Check the value passed for '{field}'"),
                "Route paths and method names must not contain whitespace or path separators"
                    .into(),
            ],
            Self::MissingClosingScope { delimiter } => vec![
                format!("The file must end with a closing '{delimiter}'"),
                "Make sure the file is a complete compilation unit before patching".into(),
            ],
            Self::MissingPackageHeader => vec![
                "The file must declare its package on a line starting with 'package '".into(),
                "The statement must end with ';' on that same line".into(),
            ],
            Self::DuplicateDeclaration { .. } => vec![
                "The operation already exists in this file".into(),
                "Use --on-duplicate skip to ignore it or --on-duplicate append to add it again"
                    .into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidField { .. }
            | Self::UnknownArtifactKind(_)
            | Self::UnknownDuplicatePolicy(_) => ErrorCategory::Validation,
            Self::MissingClosingScope { .. }
            | Self::MissingPackageHeader
            | Self::DuplicateDeclaration { .. } => ErrorCategory::Structural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Structural,
}
