//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rpcforge-adapters` crate provides implementations.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::TemplateContext;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rpcforge_adapters::filesystem::LocalFilesystem` (production)
/// - `rpcforge_adapters::filesystem::MemoryFilesystem` (testing)
/// - `rpcforge_adapters::filesystem::OverlayFilesystem` (dry runs)
///
/// Writes replace the whole file. There is no locking: two runs patching the
/// same file concurrently can lose one run's edit.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir` (not recursive), in any order.
    fn list_files(&self, dir: &Path) -> ForgeResult<Vec<PathBuf>>;
}

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateOrigin {
    Builtin,
    Override(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Override(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A stored template's id and origin, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub id: String,
    pub origin: TemplateOrigin,
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `rpcforge_adapters::template_store::InMemoryStore`
pub trait TemplateStore: Send + Sync {
    /// Template text for `id`; `TemplateNotFound` when absent.
    fn get(&self, id: &str) -> ForgeResult<String>;

    /// All templates, sorted by id.
    fn list(&self) -> ForgeResult<Vec<TemplateEntry>>;

    /// Insert or replace a template.
    fn insert(&self, id: &str, content: String, origin: TemplateOrigin) -> ForgeResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `rpcforge_adapters::renderer::SimpleRenderer` (`{{key}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template registered as `template_id` against `context`.
    fn render(&self, template_id: &str, context: &TemplateContext) -> ForgeResult<String>;
}
