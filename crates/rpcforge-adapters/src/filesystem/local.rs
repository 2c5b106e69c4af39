//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use rpcforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> ForgeResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "list directory"))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "list directory"))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_files_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("A.java"), "a").unwrap();
        std::fs::create_dir(tmp.path().join("nested")).unwrap();
        std::fs::write(tmp.path().join("nested/B.java"), "b").unwrap();

        let files = LocalFilesystem::new().list_files(tmp.path()).unwrap();
        assert_eq!(files, vec![tmp.path().join("A.java")]);
    }

    #[test]
    fn read_missing_file_maps_to_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&tmp.path().join("nope.java"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn write_truncates_existing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("f.txt");
        let fs = LocalFilesystem::new();
        fs.write_file(&path, "long original text").unwrap();
        fs.write_file(&path, "short").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "short");
    }
}
