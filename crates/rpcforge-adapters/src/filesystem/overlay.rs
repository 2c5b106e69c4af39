//! Copy-on-write overlay for dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use rpcforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// Reads fall through to `base`; writes stay in memory.
///
/// Clones share the pending writes, so the caller can keep one clone to
/// inspect what a run would have written.
#[derive(Debug, Clone)]
pub struct OverlayFilesystem<B> {
    base: B,
    pending: Arc<RwLock<Pending>>,
}

#[derive(Debug, Default)]
struct Pending {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl<B: Filesystem> OverlayFilesystem<B> {
    pub fn new(base: B) -> Self {
        Self {
            base,
            pending: Arc::new(RwLock::new(Pending::default())),
        }
    }

    /// Files that would have been written, with their final content.
    pub fn pending_writes(&self) -> Vec<(PathBuf, String)> {
        self.pending
            .read()
            .map(|p| p.files.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}

impl<B: Filesystem> Filesystem for OverlayFilesystem<B> {
    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        {
            let pending = self
                .pending
                .read()
                .map_err(|_| ApplicationError::StoreLockError)?;
            if let Some(content) = pending.files.get(path) {
                return Ok(content.clone());
            }
        }
        self.base.read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut pending = self
            .pending
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        pending.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut pending = self
            .pending
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        pending.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let staged = self
            .pending
            .read()
            .map(|p| p.files.contains_key(path) || p.directories.contains(path))
            .unwrap_or(false);
        staged || self.base.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let staged = self
            .pending
            .read()
            .map(|p| p.directories.contains(path))
            .unwrap_or(false);
        staged || self.base.is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> ForgeResult<Vec<PathBuf>> {
        let mut files: BTreeSet<PathBuf> = if self.base.is_dir(dir) {
            self.base.list_files(dir)?.into_iter().collect()
        } else {
            BTreeSet::new()
        };

        let pending = self
            .pending
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.extend(
            pending
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .cloned(),
        );

        Ok(files.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn writes_do_not_reach_base() {
        let base = MemoryFilesystem::new().with_file("d/A.java", "original");
        let overlay = OverlayFilesystem::new(base.clone());

        overlay.write_file(Path::new("d/A.java"), "patched").unwrap();
        overlay.write_file(Path::new("d/B.java"), "new").unwrap();

        assert_eq!(overlay.read_to_string(Path::new("d/A.java")).unwrap(), "patched");
        assert_eq!(base.read_file("d/A.java").as_deref(), Some("original"));
        assert!(overlay.exists(Path::new("d/B.java")));
        assert!(!base.exists(Path::new("d/B.java")));
        assert_eq!(overlay.pending_writes().len(), 2);
    }

    #[test]
    fn listing_merges_base_and_pending() {
        let base = MemoryFilesystem::new().with_file("d/A.java", "");
        let overlay = OverlayFilesystem::new(base);
        overlay.write_file(Path::new("d/B.java"), "").unwrap();

        assert_eq!(
            overlay.list_files(Path::new("d")).unwrap(),
            vec![PathBuf::from("d/A.java"), PathBuf::from("d/B.java")]
        );
    }
}
