//! Per-project wiring: constants holder and proxy types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::naming::{last_segment, namespace_of};

/// Static configuration for one project.
///
/// Type references are stored fully qualified; the short names and
/// namespaces templates need are derived on demand. Any field may be blank,
/// which means the feature is not wired for the project yet. Accessors on a
/// blank field return `""` (or `None` for the constants file) instead of
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDescriptor {
    #[serde(skip)]
    pub project_id: String,
    /// Fully qualified constants holder type.
    pub constants_type: String,
    /// Constants holder file, relative to the repository root.
    pub constants_file: String,
    /// Fully qualified outward service proxy type.
    pub service_proxy: String,
    /// Fully qualified internal core proxy type.
    pub core_proxy: String,
}

impl ProjectDescriptor {
    pub fn new(
        project_id: impl Into<String>,
        constants_type: impl Into<String>,
        constants_file: impl Into<String>,
        service_proxy: impl Into<String>,
        core_proxy: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            constants_type: constants_type.into(),
            constants_file: constants_file.into(),
            service_proxy: service_proxy.into(),
            core_proxy: core_proxy.into(),
        }
    }

    /// A descriptor with every field blank.
    pub fn blank(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.constants_type.trim().is_empty()
            && self.constants_file.trim().is_empty()
            && self.service_proxy.trim().is_empty()
            && self.core_proxy.trim().is_empty()
    }

    pub fn constants_type_name(&self) -> &str {
        short_name(&self.constants_type)
    }

    pub fn constants_namespace(&self) -> &str {
        namespace_of(self.constants_type.trim())
    }

    /// `None` when the path is blank.
    pub fn constants_file_path(&self) -> Option<&Path> {
        let trimmed = self.constants_file.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }

    pub fn proxy_type_name(&self) -> &str {
        short_name(&self.service_proxy)
    }

    pub fn proxy_namespace(&self) -> &str {
        namespace_of(self.service_proxy.trim())
    }

    pub fn core_proxy_type_name(&self) -> &str {
        short_name(&self.core_proxy)
    }
}

fn short_name(fq_name: &str) -> &str {
    let trimmed = fq_name.trim();
    if trimmed.is_empty() {
        ""
    } else {
        last_segment(trimmed, ".")
    }
}

/// Read-only lookup from project id to descriptor.
///
/// Built once at start-up and handed to the orchestrator; nothing mutates it
/// during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: BTreeMap<String, ProjectDescriptor>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: ProjectDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Insert or replace the descriptor keyed by its `project_id`.
    pub fn insert(&mut self, descriptor: ProjectDescriptor) {
        self.projects
            .insert(descriptor.project_id.clone(), descriptor);
    }

    /// Entries from `other` replace same-named entries in `self`.
    pub fn merge(&mut self, other: ProjectRegistry) {
        self.projects.extend(other.projects);
    }

    /// Descriptor for `project_id`, or an all-blank descriptor when unknown.
    pub fn lookup(&self, project_id: &str) -> ProjectDescriptor {
        self.projects
            .get(project_id)
            .cloned()
            .unwrap_or_else(|| ProjectDescriptor::blank(project_id))
    }

    pub fn get(&self, project_id: &str) -> Option<&ProjectDescriptor> {
        self.projects.get(project_id)
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.projects.contains_key(project_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectDescriptor> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl FromIterator<ProjectDescriptor> for ProjectRegistry {
    fn from_iter<I: IntoIterator<Item = ProjectDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.insert(descriptor);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treasure() -> ProjectDescriptor {
        ProjectDescriptor::new(
            "treasurecore",
            "com.acme.treasurecore.biz.constants.TreasureServiceConstants",
            "app/biz/src/main/java/com/acme/treasurecore/biz/constants/TreasureServiceConstants.java",
            "com.acme.treasurecore.facade.TreasureServiceProxy",
            "com.acme.treasurecore.biz.gateway.TreasureCoreProxyService",
        )
    }

    #[test]
    fn accessors_split_qualified_names() {
        let d = treasure();
        assert_eq!(d.constants_type_name(), "TreasureServiceConstants");
        assert_eq!(d.constants_namespace(), "com.acme.treasurecore.biz.constants");
        assert_eq!(d.proxy_type_name(), "TreasureServiceProxy");
        assert_eq!(d.proxy_namespace(), "com.acme.treasurecore.facade");
        assert_eq!(d.core_proxy_type_name(), "TreasureCoreProxyService");
        assert!(d.constants_file_path().is_some());
    }

    #[test]
    fn unknown_project_yields_blank_descriptor() {
        let registry = ProjectRegistry::new().with(treasure());
        let d = registry.lookup("nosuchproject");

        assert_eq!(d.project_id, "nosuchproject");
        assert!(d.is_blank());
        assert_eq!(d.constants_type_name(), "");
        assert_eq!(d.constants_namespace(), "");
        assert_eq!(d.proxy_type_name(), "");
        assert_eq!(d.core_proxy_type_name(), "");
        assert_eq!(d.constants_file_path(), None);
    }

    #[test]
    fn whitespace_only_file_counts_as_blank() {
        let mut d = treasure();
        d.constants_file = "   ".into();
        assert_eq!(d.constants_file_path(), None);
    }

    #[test]
    fn merge_overrides_existing_entries() {
        let mut registry = ProjectRegistry::new().with(treasure());
        let mut replacement = treasure();
        replacement.core_proxy = "x.Other".into();
        registry.merge(ProjectRegistry::new().with(replacement));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("treasurecore").core_proxy_type_name(), "Other");
    }
}
