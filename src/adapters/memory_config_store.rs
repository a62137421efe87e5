use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// In-memory configuration store for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    // Shared so clones observe each other's writes.
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files().insert(path.into(), content.into());
        self
    }

    fn files(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files().contains_key(path)
    }
}
