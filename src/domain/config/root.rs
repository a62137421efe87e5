use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::compiler::{CompilerSpec, DEFAULT_COMPILER, DEFAULT_SOLC_RANGE};
use super::network::NetworkProfile;
use crate::domain::AppError;

pub const DEFAULT_NETWORK: &str = "local";

/// Top-level toolchain configuration: named networks and named compilers.
///
/// `Default` is the stock development setup (a `local` node on
/// `localhost:8545` accepting any chain, and `solc` pinned to `^0.8`).
/// Parsing checks shape only; see [`super::validate`] for consumer-side rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRoot {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
    #[serde(default)]
    pub compilers: BTreeMap<String, CompilerSpec>,
}

impl Default for ConfigRoot {
    fn default() -> Self {
        Self {
            networks: BTreeMap::from([(DEFAULT_NETWORK.to_string(), NetworkProfile::local())]),
            compilers: BTreeMap::from([(
                DEFAULT_COMPILER.to_string(),
                CompilerSpec::new(DEFAULT_SOLC_RANGE),
            )]),
        }
    }
}

impl ConfigRoot {
    /// A configuration with no networks and no compilers.
    pub fn empty() -> Self {
        Self { networks: BTreeMap::new(), compilers: BTreeMap::new() }
    }

    pub fn network(&self, name: &str) -> Result<&NetworkProfile, AppError> {
        self.networks.get(name).ok_or_else(|| AppError::NetworkNotFound(name.to_string()))
    }

    pub fn compiler(&self, name: &str) -> Result<&CompilerSpec, AppError> {
        self.compilers.get(name).ok_or_else(|| AppError::CompilerNotFound(name.to_string()))
    }
}
