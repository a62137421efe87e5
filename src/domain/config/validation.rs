//! Consumer-side checks.
//!
//! Loading a configuration never runs these. They describe what a tool
//! consuming the configuration would reject, and back the `check` command.

use std::fmt;

use super::ConfigRoot;

/// A single problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field (e.g. `networks.local.port`).
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collect every issue; an empty result means the configuration is usable.
///
/// When `required_network` is set, that profile must exist.
pub fn validate(config: &ConfigRoot, required_network: Option<&str>) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if config.networks.is_empty() {
        issues.push(ConfigIssue::new("networks", "at least one network profile is required"));
    }

    if let Some(name) = required_network {
        if !config.networks.contains_key(name) {
            issues.push(ConfigIssue::new(
                format!("networks.{}", name),
                "network profile not defined",
            ));
        }
    }

    for (name, profile) in &config.networks {
        let prefix = format!("networks.{}", name);

        if profile.host.trim().is_empty() {
            issues.push(ConfigIssue::new(format!("{}.host", prefix), "host must not be empty"));
        } else if let Err(err) = profile.endpoint() {
            issues.push(ConfigIssue::new(format!("{}.host", prefix), err.to_string()));
        }

        if profile.port == 0 {
            issues.push(ConfigIssue::new(format!("{}.port", prefix), "port must be greater than 0"));
        }

        if profile.gas == Some(0) {
            issues.push(ConfigIssue::new(format!("{}.gas", prefix), "gas must be greater than 0"));
        }
    }

    for (name, spec) in &config.compilers {
        let prefix = format!("compilers.{}", name);

        if spec.version.trim().is_empty() {
            issues.push(ConfigIssue::new(
                format!("{}.version", prefix),
                "version range must not be empty",
            ));
        } else if let Err(err) = spec.range() {
            issues.push(ConfigIssue::new(format!("{}.version", prefix), err.to_string()));
        }

        let optimizer = spec.settings.as_ref().and_then(|settings| settings.optimizer.as_ref());
        if optimizer.is_some_and(|optimizer| optimizer.enabled && optimizer.runs == 0) {
            issues.push(ConfigIssue::new(
                format!("{}.settings.optimizer.runs", prefix),
                "runs must be greater than 0 when the optimizer is enabled",
            ));
        }
    }

    issues
}
