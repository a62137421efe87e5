use std::path::{Path, PathBuf};

use log::debug;

use crate::app::AppContext;
use crate::app::commands::load;
use crate::domain::config::validate;
use crate::domain::{AppError, ConfigIssue};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Network profile that must be present.
    pub network: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub issues: Vec<ConfigIssue>,
    pub exit_code: i32,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Load the configuration and apply consumer-side validation.
///
/// Shape errors (unreadable or unparsable files) are returned as `Err`;
/// semantic problems are collected into the outcome.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    path: &Path,
    options: &CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let config = load::execute(ctx.store(), path)?;
    let issues = validate(&config, options.network.as_deref());

    for issue in &issues {
        debug!("{}: {}", path.display(), issue);
    }

    let exit_code = if issues.is_empty() { 0 } else { 1 };
    Ok(CheckOutcome { path: path.to_path_buf(), issues, exit_code })
}
