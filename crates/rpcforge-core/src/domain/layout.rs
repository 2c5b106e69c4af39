//! Source tree layout: where each module's sources live and how namespaces
//! map onto directories.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::naming::namespace_to_path;

/// Root-relative locations of the three source modules and the wiring file.
///
/// All paths are relative to the target repository root. Defaults match the
/// conventional multi-module layout (`app/facade`, `app/facade-impl`,
/// `app/biz`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    /// Namespace prefix shared by every project, without a trailing dot.
    pub common_prefix: String,
    pub facade_root: PathBuf,
    pub facade_impl_root: PathBuf,
    pub biz_root: PathBuf,
    /// Service wiring file patched when a brand-new interface is created.
    pub beans_file: PathBuf,
    pub file_extension: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            common_prefix: "com.ly.flight.intl".into(),
            facade_root: PathBuf::from("app/facade/src/main/java"),
            facade_impl_root: PathBuf::from("app/facade-impl/src/main/java"),
            biz_root: PathBuf::from("app/biz/src/main/java"),
            beans_file: PathBuf::from(
                "app/facade-impl/src/main/resources/META-INF/spring/facade-impl-beans.xml",
            ),
            file_extension: "java".into(),
        }
    }
}

/// Which module root an artifact is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRoot {
    Facade,
    FacadeImpl,
    Biz,
}

impl SourceLayout {
    /// `{prefix}.{project}`, or just the project id when the prefix is empty.
    pub fn project_namespace(&self, project_id: &str) -> String {
        let prefix = self.common_prefix.trim_end_matches('.');
        if prefix.is_empty() {
            project_id.to_string()
        } else {
            format!("{prefix}.{project_id}")
        }
    }

    /// Project namespace followed by `suffix`, which starts with a dot.
    pub fn namespace(&self, project_id: &str, suffix: &str) -> String {
        format!("{}{suffix}", self.project_namespace(project_id))
    }

    pub fn root(&self, module: ModuleRoot) -> &PathBuf {
        match module {
            ModuleRoot::Facade => &self.facade_root,
            ModuleRoot::FacadeImpl => &self.facade_impl_root,
            ModuleRoot::Biz => &self.biz_root,
        }
    }

    /// Directory scanned for existing interface declarations.
    pub fn facade_dir(&self, project_id: &str) -> PathBuf {
        self.facade_root
            .join(namespace_to_path(&self.namespace(project_id, ".facade")))
    }

    /// `{module root}/{namespace as dirs}/{type_name}.{ext}`
    pub fn source_file(&self, module: ModuleRoot, namespace: &str, type_name: &str) -> PathBuf {
        self.root(module)
            .join(namespace_to_path(namespace))
            .join(format!("{type_name}.{}", self.file_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_dir_follows_prefix_and_project() {
        let layout = SourceLayout::default();
        assert_eq!(
            layout.facade_dir("treasurecore"),
            PathBuf::from("app/facade/src/main/java/com/ly/flight/intl/treasurecore/facade")
        );
    }

    #[test]
    fn source_file_maps_namespace_to_dirs() {
        let layout = SourceLayout::default();
        let path = layout.source_file(ModuleRoot::Biz, "a.b.c", "Thing");
        assert_eq!(path, PathBuf::from("app/biz/src/main/java/a/b/c/Thing.java"));
    }

    #[test]
    fn empty_prefix_uses_bare_project() {
        let layout = SourceLayout {
            common_prefix: String::new(),
            ..SourceLayout::default()
        };
        assert_eq!(layout.namespace("demo", ".facade"), "demo.facade");
    }

    #[test]
    fn trailing_dot_in_prefix_is_tolerated() {
        let layout = SourceLayout {
            common_prefix: "org.acme.".into(),
            ..SourceLayout::default()
        };
        assert_eq!(layout.project_namespace("demo"), "org.acme.demo");
    }
}
