//! Locate the existing interface that already owns a route.

use std::path::Path;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::facade::{declares_route, extract_package};
use crate::domain::{FacadeMatch, FacadeResolution};
use crate::error::ForgeResult;

pub struct FacadeResolver<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FacadeResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Scan `root/facade_dir` (non-recursive) for a file with the given
    /// extension whose text binds `route_path`.
    ///
    /// Candidates are visited in lexical file-name order and the first match
    /// wins. The returned path is relative to `root`.
    ///
    /// # Errors
    ///
    /// `FacadeDirectoryMissing` when the directory is absent or not a
    /// directory; filesystem errors while listing or reading.
    #[instrument(skip_all, fields(dir = %facade_dir.display(), route = route_path))]
    pub fn resolve(
        &self,
        root: &Path,
        facade_dir: &Path,
        route_path: &str,
        extension: &str,
    ) -> ForgeResult<FacadeResolution> {
        let dir = root.join(facade_dir);
        if !self.filesystem.is_dir(&dir) {
            return Err(ApplicationError::FacadeDirectoryMissing { path: dir }.into());
        }

        let mut candidates: Vec<_> = self
            .filesystem
            .list_files(&dir)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .collect();
        candidates.sort();

        for path in candidates {
            let content = self.filesystem.read_to_string(&path)?;
            if !declares_route(&content, route_path) {
                continue;
            }

            let Some(type_name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            debug!(file = %path.display(), "route already declared");
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            return Ok(FacadeResolution::Matched(FacadeMatch {
                namespace: extract_package(&content),
                type_name: type_name.to_string(),
                file_path: relative,
            }));
        }

        debug!("no interface declares the route");
        Ok(FacadeResolution::NotFound)
    }
}
