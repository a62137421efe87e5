//! Configuration file I/O.
//!
//! Commands talk to this port instead of `std::fs` so they can run against
//! an in-memory store in tests.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing configuration documents.
pub trait ConfigStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;
}
