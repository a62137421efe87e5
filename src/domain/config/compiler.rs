//! Compiler selection models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::version::{Version, VersionRange};

pub const DEFAULT_COMPILER: &str = "solc";
pub const DEFAULT_SOLC_RANGE: &str = "^0.8";

/// Compiler selection: a version range plus optional build settings.
///
/// The range is kept as written. Loading never rejects a malformed range;
/// call [`CompilerSpec::range`] to evaluate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerSpec {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<CompilerSettings>,
}

impl CompilerSpec {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into(), settings: None }
    }

    pub fn range(&self) -> Result<VersionRange, AppError> {
        VersionRange::parse(&self.version)
    }

    /// Latest build among `available` that satisfies the range.
    pub fn select<'a>(&self, available: &'a [Version]) -> Result<Option<&'a Version>, AppError> {
        Ok(self.range()?.max_satisfying(available))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerSettings {
    /// Target EVM hard fork (e.g. `paris`, `shanghai`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_optimizer_runs")]
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self { enabled: false, runs: default_optimizer_runs() }
    }
}

fn default_optimizer_runs() -> u32 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_solc_range_tracks_latest_zero_eight() {
        let spec = CompilerSpec::new(DEFAULT_SOLC_RANGE);
        let available = vec![
            Version::new(0, 7, 6),
            Version::new(0, 8, 19),
            Version::new(0, 8, 24),
            Version::new(0, 9, 0),
        ];
        assert_eq!(spec.select(&available).unwrap(), Some(&Version::new(0, 8, 24)));
    }

    #[test]
    fn malformed_range_only_fails_on_evaluation() {
        let spec = CompilerSpec::new("^zero.eight");
        assert!(matches!(spec.range(), Err(AppError::InvalidVersionRange { .. })));
        assert!(spec.select(&[Version::new(0, 8, 0)]).is_err());
    }

    #[test]
    fn optimizer_defaults_match_solc() {
        let optimizer: OptimizerSettings = toml::from_str("enabled = true").unwrap();
        assert!(optimizer.enabled);
        assert_eq!(optimizer.runs, 200);
        assert_eq!(OptimizerSettings::default().runs, 200);
    }
}
