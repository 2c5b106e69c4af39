use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::validation::InputValidator;

/// The four inputs to one scaffolding run.
///
/// Construction trims every field and rejects blank values, so a value of
/// this type is always usable for name derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpecification {
    project_id: String,
    route_path: String,
    method_name: String,
    author: String,
}

impl MethodSpecification {
    pub fn new(
        project_id: impl AsRef<str>,
        route_path: impl AsRef<str>,
        method_name: impl AsRef<str>,
        author: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let project_id = InputValidator::required("project", project_id.as_ref())?;
        let route_path = InputValidator::identifier("path", route_path.as_ref())?;
        let method_name = InputValidator::identifier("method", method_name.as_ref())?;
        let author = InputValidator::required("author", author.as_ref())?;

        Ok(Self {
            project_id,
            route_path,
            method_name,
            author,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for MethodSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}#{}", self.project_id, self.route_path, self.method_name)
    }
}
