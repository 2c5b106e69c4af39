//! The output of planning: derived names, artifact targets and the shared
//! template context.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::ArtifactKind;

/// Every identifier one run needs, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// Stem shared by the interface and constant names.
    pub base_name: String,
    pub method_pascal: String,
    pub request_dto: String,
    pub response_dto: String,
    pub request_vo: String,
    pub response_vo: String,
    pub interface: String,
    pub implementation: String,
    pub validator: String,
    pub mapper: String,
    pub converter: String,
    pub manager: String,
    /// Upper-snake constant identifying the operation.
    pub constant: String,
}

/// Where one artifact lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactTarget {
    pub kind: ArtifactKind,
    pub namespace: String,
    pub type_name: String,
    /// Relative to the repository root.
    pub file_path: PathBuf,
}

impl ArtifactTarget {
    pub fn fq_name(&self) -> String {
        if self.namespace.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.type_name)
        }
    }
}

/// Template variables shared read-only by every render in one run.
///
/// Keys are kept sorted so debug output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replace `{{key}}` placeholders in a single left-to-right pass.
    ///
    /// - `{{unknown}}` stays as the literal text
    /// - substituted values are never re-scanned, so a value containing
    ///   `{{...}}` is emitted verbatim
    /// - whitespace inside the braces is ignored (`{{ key }}`)
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = after_open[..end].trim();
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[start..start + 2 + end + 2]),
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Everything the orchestrator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub method_name: String,
    pub names: DerivedNames,
    /// The eight always-new artifacts, in generation order.
    pub new_artifacts: Vec<ArtifactTarget>,
    pub interface: ArtifactTarget,
    /// Whether `interface` points at an existing file that declares the route.
    pub interface_matched: bool,
    pub implementation: ArtifactTarget,
    pub context: TemplateContext,
}

impl ArtifactPlan {
    pub fn target(&self, kind: ArtifactKind) -> Option<&ArtifactTarget> {
        match kind {
            ArtifactKind::Interface => Some(&self.interface),
            ArtifactKind::Implementation => Some(&self.implementation),
            _ => self.new_artifacts.iter().find(|t| t.kind == kind),
        }
    }

    /// Imports the interface needs for the request and response DTOs.
    pub fn dto_imports(&self) -> Vec<String> {
        [ArtifactKind::RequestDto, ArtifactKind::ResponseDto]
            .into_iter()
            .filter_map(|kind| self.target(kind))
            .map(ArtifactTarget::fq_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_known_keys() {
        let ctx = TemplateContext::new()
            .with_variable("name", "Order")
            .with_variable("pkg", "a.b");
        assert_eq!(ctx.render("package {{pkg}};\nclass {{ name }} {}"), "package a.b;\nclass Order {}");
    }

    #[test]
    fn render_leaves_unknown_and_unterminated_placeholders() {
        let ctx = TemplateContext::new().with_variable("x", "1");
        assert_eq!(ctx.render("{{y}}-{{x}}-{{z"), "{{y}}-1-{{z");
    }

    #[test]
    fn render_does_not_rescan_values() {
        let ctx = TemplateContext::new()
            .with_variable("a", "{{b}}")
            .with_variable("b", "oops");
        assert_eq!(ctx.render("{{a}}{{a}}"), "{{b}}{{b}}");
    }

    #[test]
    fn fq_name_without_namespace() {
        let target = ArtifactTarget {
            kind: ArtifactKind::Manager,
            namespace: String::new(),
            type_name: "M".into(),
            file_path: PathBuf::from("M.java"),
        };
        assert_eq!(target.fq_name(), "M");
    }
}
