//! Configuration discovery.

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::AppError;
use crate::domain::config::paths;
use crate::ports::ConfigStore;

/// Find the configuration file for a command.
///
/// An explicit path wins and must exist (relative paths resolve against
/// `start`). Otherwise `start` and each ancestor directory are searched for
/// the first recognized file name.
pub fn execute<S: ConfigStore>(
    store: &S,
    start: &Path,
    explicit: Option<&Path>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() { path.to_path_buf() } else { start.join(path) };
        if store.file_exists(&path) {
            return Ok(path);
        }
        return Err(AppError::ConfigNotFound { searched: path.display().to_string() });
    }

    for dir in start.ancestors() {
        if let Some(found) = paths::candidates(dir).find(|candidate| store.file_exists(candidate)) {
            debug!("Using configuration {}", found.display());
            return Ok(found);
        }
    }

    Err(AppError::ConfigNotFound { searched: start.display().to_string() })
}
