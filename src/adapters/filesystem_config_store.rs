use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Filesystem-backed configuration store.
///
/// Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root: PathBuf,
}

impl FilesystemConfigStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }
}
