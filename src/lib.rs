//! chaincfg: typed development-network and compiler configuration for a blockchain toolchain.
//!
//! The stock configuration is a `local` node on `localhost:8545` accepting
//! any chain id, and `solc` constrained to `^0.8`. It is available as
//! [`ConfigRoot::default`] and is what `chaincfg init` writes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use adapters::FilesystemConfigStore;
use app::AppContext;
use app::commands::{check, endpoint, init, load, locate, resolve, show};

pub use app::commands::check::{CheckOptions, CheckOutcome};
pub use app::commands::endpoint::EndpointReport;
pub use app::commands::init::InitOptions;
pub use app::commands::resolve::ResolveOutcome;
pub use app::logging::{LogLevel, init_logger};
pub use domain::config::{DEFAULT_COMPILER, DEFAULT_NETWORK};
pub use domain::{
    AppError, CompilerSettings, CompilerSpec, ConfigFormat, ConfigIssue, ConfigRoot, NetworkId,
    NetworkProfile, OptimizerSettings, Version, VersionRange,
};

/// Load a configuration file. The format follows the file extension.
pub fn load_config(path: &Path) -> Result<ConfigRoot, AppError> {
    let store = FilesystemConfigStore::current()?;
    load::execute(&store, path)
}

/// Find the nearest configuration file at or above `start`.
///
/// A relative `start` resolves against the current directory, and so does
/// the returned path.
pub fn discover_config(start: &Path) -> Result<PathBuf, AppError> {
    let start = std::path::absolute(start)?;
    let store = FilesystemConfigStore::new(start.clone());
    locate::execute(&store, &start, None)
}

// =============================================================================
// Command API
// =============================================================================

/// Absolute form of `root` and a context over a store rooted there.
///
/// Commands join their file names onto the root they are given, so the
/// store must never resolve those paths against the root a second time.
fn context_at(root: &Path) -> Result<(PathBuf, AppContext<FilesystemConfigStore>), AppError> {
    let root = std::path::absolute(root)?;
    let ctx = AppContext::new(FilesystemConfigStore::new(root.clone()));
    Ok((root, ctx))
}

/// Write a starter configuration into `root`.
///
/// Returns the absolute path of the created file.
pub fn init_at(root: PathBuf, options: InitOptions) -> Result<PathBuf, AppError> {
    let (root, ctx) = context_at(&root)?;
    init::execute(&ctx, &root, &options)
}

/// Render the configuration found from `root` (or at `config`).
pub fn show_at(
    root: PathBuf,
    config: Option<&Path>,
    format: Option<ConfigFormat>,
) -> Result<String, AppError> {
    let (root, ctx) = context_at(&root)?;
    let path = locate::execute(ctx.store(), &root, config)?;
    show::execute(&ctx, &path, format)
}

/// Validate the configuration found from `root` (or at `config`).
pub fn check_at(
    root: PathBuf,
    config: Option<&Path>,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let (root, ctx) = context_at(&root)?;
    let path = locate::execute(ctx.store(), &root, config)?;
    check::execute(&ctx, &path, &options)
}

/// Resolve the endpoint URL of `network`.
pub fn endpoint_at(
    root: PathBuf,
    config: Option<&Path>,
    network: &str,
    chain_id: Option<u64>,
) -> Result<EndpointReport, AppError> {
    let (root, ctx) = context_at(&root)?;
    let path = locate::execute(ctx.store(), &root, config)?;
    endpoint::execute(&ctx, &path, network, chain_id)
}

/// Evaluate the version range of `compiler` against optional candidate builds.
pub fn resolve_at(
    root: PathBuf,
    config: Option<&Path>,
    compiler: &str,
    available: &[String],
) -> Result<ResolveOutcome, AppError> {
    let (root, ctx) = context_at(&root)?;
    let path = locate::execute(ctx.store(), &root, config)?;
    resolve::execute(&ctx, &path, compiler, available)
}
