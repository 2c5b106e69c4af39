use crate::domain::error::DomainError;

/// Centralized input validation.
///
/// Entities call into this instead of repeating trimming rules.
pub struct InputValidator;

impl InputValidator {
    /// Trimmed value, or `MissingRequiredField` when blank.
    pub fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingRequiredField { field });
        }
        Ok(trimmed.to_string())
    }

    /// Like [`required`](Self::required), and additionally rejects inner
    /// whitespace and path separators.
    ///
    /// Route paths and method names end up in namespaces, directory names
    /// and annotation literals, so they must be a single token.
    pub fn identifier(field: &'static str, value: &str) -> Result<String, DomainError> {
        let trimmed = Self::required(field, value)?;

        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '\\'))
        {
            let reason = if bad.is_whitespace() {
                "must not contain whitespace".to_string()
            } else {
                format!("must not contain '{bad}'")
            };
            return Err(DomainError::InvalidField {
                field,
                value: trimmed,
                reason,
            });
        }

        Ok(trimmed)
    }
}
