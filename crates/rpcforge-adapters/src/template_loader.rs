//! Filesystem-based template overrides.
//!
//! Any built-in template can be replaced by dropping a file named
//! `<id>.tpl` somewhere under a templates directory:
//!
//! ```text
//! templates/
//! ├── facade.tpl
//! └── carriers/
//!     ├── requestDTO.tpl
//!     └── responseDTO.tpl
//! ```
//!
//! The directory is walked recursively in file-name order. When the same id
//! appears twice the first file wins and the other is skipped with a warning.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use rpcforge_core::{
    application::ports::{TemplateOrigin, TemplateStore},
    error::{ForgeError, ForgeResult},
};

use crate::builtin_templates;

/// File extension recognised as a template override.
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// One override file read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOverride {
    pub id: String,
    pub path: PathBuf,
    pub content: String,
}

/// Loads `<id>.tpl` overrides from a directory tree.
///
/// ```no_run
/// use rpcforge_adapters::{InMemoryStore, template_loader::FilesystemTemplateLoader};
///
/// let store = InMemoryStore::with_builtin()?;
/// let applied = FilesystemTemplateLoader::new("./templates").apply_to(&store)?;
/// println!("{applied} templates overridden");
/// # Ok::<(), rpcforge_core::error::ForgeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Read every override under the templates directory.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directory does not exist or is
    /// not a directory. Files that cannot be read are skipped with a `WARN`
    /// log rather than failing the batch.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> ForgeResult<Vec<TemplateOverride>> {
        if !self.templates_dir.is_dir() {
            return Err(ForgeError::configuration(format!(
                "templates directory not found: {}",
                self.templates_dir.display()
            )));
        }

        let mut found: BTreeMap<String, TemplateOverride> = BTreeMap::new();

        let walker = WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .sort_by_file_name();

        for walk_entry in walker {
            let entry = match walk_entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_template_file(path) {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            if let Some(existing) = found.get(id) {
                warn!(
                    id,
                    kept = %existing.path.display(),
                    skipped = %path.display(),
                    "duplicate template override"
                );
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable template");
                    continue;
                }
            };

            if builtin_templates::get(id).is_none() {
                warn!(id, "override does not match any built-in template and will not be used");
            }

            debug!(id, path = %path.display(), "loaded template override");
            found.insert(
                id.to_string(),
                TemplateOverride {
                    id: id.to_string(),
                    path: path.to_path_buf(),
                    content,
                },
            );
        }

        debug!(count = found.len(), "finished loading template overrides");
        Ok(found.into_values().collect())
    }

    /// Load overrides into `store`, replacing same-id entries.
    ///
    /// Returns how many templates were inserted.
    pub fn apply_to(&self, store: &dyn TemplateStore) -> ForgeResult<usize> {
        let overrides = self.load_all()?;
        let count = overrides.len();
        for o in overrides {
            store.insert(&o.id, o.content, TemplateOrigin::Override(o.path))?;
        }
        Ok(count)
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template_store::InMemoryStore;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let full = dir.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let temp = TempDir::new().unwrap();
        let loader = FilesystemTemplateLoader::new(temp.path().join("nope"));
        assert!(matches!(
            loader.load_all(),
            Err(ForgeError::Configuration { .. })
        ));
    }

    #[test]
    fn finds_tpl_files_recursively() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "facade.tpl", "F");
        write(temp.path(), "carriers/requestDTO.tpl", "R");
        write(temp.path(), "README.md", "ignored");

        let overrides = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        let ids: Vec<&str> = overrides.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["facade", "requestDTO"]);
        assert_eq!(overrides[1].content, "R");
    }

    #[test]
    fn first_duplicate_in_name_order_wins() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a/manager.tpl", "first");
        write(temp.path(), "b/manager.tpl", "second");

        let overrides = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].content, "first");
    }

    #[test]
    fn apply_replaces_builtin_and_records_origin() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "validator.tpl", "custom {{validatorClassName}}");

        let store = InMemoryStore::with_builtin().unwrap();
        let applied = FilesystemTemplateLoader::new(temp.path())
            .apply_to(&store)
            .unwrap();

        assert_eq!(applied, 1);
        assert_eq!(store.get("validator").unwrap(), "custom {{validatorClassName}}");
        let entry = store
            .list()
            .unwrap()
            .into_iter()
            .find(|e| e.id == "validator")
            .unwrap();
        assert!(matches!(entry.origin, TemplateOrigin::Override(_)));
    }
}
