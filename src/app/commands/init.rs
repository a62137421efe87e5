use std::path::{Path, PathBuf};

use log::info;

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, ConfigFormat};
use crate::ports::ConfigStore;
use crate::services::starter_config;

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub format: ConfigFormat,
    /// Overwrite an existing file of the same format.
    pub force: bool,
}

/// Write a starter configuration into `dir`.
///
/// Refuses when any recognized configuration file already exists there,
/// unless `force` is set.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    dir: &Path,
    options: &InitOptions,
) -> Result<PathBuf, AppError> {
    if !options.force {
        if let Some(existing) = paths::candidates(dir).find(|path| ctx.store().file_exists(path)) {
            return Err(AppError::ConfigExists(existing.display().to_string()));
        }
    }

    let path = paths::config_file(dir, options.format);
    let content = starter_config(options.format)?;
    ctx.store().write_file(&path, &content)?;

    info!("Wrote {} starter configuration to {}", options.format, path.display());
    Ok(path)
}
