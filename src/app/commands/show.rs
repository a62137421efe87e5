use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::load;
use crate::domain::{AppError, ConfigFormat};
use crate::ports::ConfigStore;

/// Render the configuration at `path`, in its own format unless `format` is given.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    path: &Path,
    format: Option<ConfigFormat>,
) -> Result<String, AppError> {
    let config = load::execute(ctx.store(), path)?;
    let format = match format {
        Some(format) => format,
        None => ConfigFormat::from_path(path)?,
    };
    format.render(&config)
}
