pub mod config;
pub mod error;
pub mod version;

pub use config::{
    CompilerSettings, CompilerSpec, ConfigFormat, ConfigIssue, ConfigRoot, NetworkId,
    NetworkProfile, OptimizerSettings,
};
pub use error::AppError;
pub use version::{Version, VersionRange};
