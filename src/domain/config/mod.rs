pub mod compiler;
pub mod format;
pub mod network;
pub mod paths;
pub mod root;
pub mod validation;

pub use compiler::{
    CompilerSettings, CompilerSpec, DEFAULT_COMPILER, DEFAULT_SOLC_RANGE, OptimizerSettings,
};
pub use format::ConfigFormat;
pub use network::{DEFAULT_HOST, DEFAULT_PORT, NETWORK_ID_WILDCARD, NetworkId, NetworkProfile};
pub use paths::CONFIG_FILE_NAMES;
pub use root::{ConfigRoot, DEFAULT_NETWORK};
pub use validation::{ConfigIssue, validate};
