use std::path::Path;

use log::debug;

use crate::domain::{AppError, ConfigFormat, ConfigRoot};
use crate::ports::ConfigStore;

/// Read and parse a configuration file. The format follows the extension.
///
/// Only the document shape is checked here.
pub fn execute<S: ConfigStore>(store: &S, path: &Path) -> Result<ConfigRoot, AppError> {
    let format = ConfigFormat::from_path(path)?;
    let content = store.read_file(path)?;
    let config = format.parse(&content)?;

    debug!(
        "Loaded {} network(s) and {} compiler(s) from {}",
        config.networks.len(),
        config.compilers.len(),
        path.display()
    );
    Ok(config)
}
