use std::path::Path;

use log::debug;

use crate::app::AppContext;
use crate::app::commands::load;
use crate::domain::{AppError, Version};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub compiler: String,
    /// Range as written in the configuration.
    pub range: String,
    /// Desugared comparator form of the range.
    pub normalized: String,
    /// Highest candidate satisfying the range, when candidates were given.
    pub selected: Option<Version>,
}

/// Evaluate a compiler's version range, optionally picking the best of `available`.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    path: &Path,
    compiler: &str,
    available: &[String],
) -> Result<ResolveOutcome, AppError> {
    let config = load::execute(ctx.store(), path)?;
    let spec = config.compiler(compiler)?;
    let range = spec.range()?;

    let candidates =
        available.iter().map(|raw| Version::parse(raw)).collect::<Result<Vec<_>, _>>()?;

    let selected = if candidates.is_empty() {
        None
    } else {
        let best = range.max_satisfying(&candidates).cloned().ok_or_else(|| {
            AppError::NoMatchingCompiler {
                compiler: compiler.to_string(),
                range: spec.version.clone(),
                available: available.join(", "),
            }
        })?;
        debug!("Selected {} {} for '{}'", compiler, best, spec.version);
        Some(best)
    };

    Ok(ResolveOutcome {
        compiler: compiler.to_string(),
        range: spec.version.clone(),
        normalized: range.to_string(),
        selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConfigStore;

    fn ctx(version: &str) -> AppContext<MemoryConfigStore> {
        let content = format!("[compilers.solc]\nversion = \"{}\"\n", version);
        AppContext::new(MemoryConfigStore::new().with_file("/p/chaincfg.toml", content))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalizes_without_candidates() {
        let outcome = execute(&ctx("^0.8"), Path::new("/p/chaincfg.toml"), "solc", &[]).unwrap();
        assert_eq!(outcome.range, "^0.8");
        assert_eq!(outcome.normalized, ">=0.8.0 <0.9.0");
        assert_eq!(outcome.selected, None);
    }

    #[test]
    fn selects_latest_matching_build() {
        let available = strings(&["0.7.6", "0.8.19+commit.7dd6d404", "0.8.26", "0.9.0"]);
        let outcome =
            execute(&ctx("^0.8"), Path::new("/p/chaincfg.toml"), "solc", &available).unwrap();
        assert_eq!(outcome.selected, Some(Version::new(0, 8, 26)));
    }

    #[test]
    fn no_match_is_an_error() {
        let available = strings(&["0.7.6", "0.9.0"]);
        let err =
            execute(&ctx("^0.8"), Path::new("/p/chaincfg.toml"), "solc", &available).unwrap_err();
        assert!(matches!(err, AppError::NoMatchingCompiler { .. }));
    }

    #[test]
    fn bad_candidates_and_ranges_are_reported() {
        let path = Path::new("/p/chaincfg.toml");
        let err = execute(&ctx("^0.8"), path, "solc", &strings(&["latest"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidVersion(v) if v == "latest"));

        let err = execute(&ctx("^eight"), path, "solc", &[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidVersionRange { .. }));

        let err = execute(&ctx("^0.8"), path, "vyper", &[]).unwrap_err();
        assert!(matches!(err, AppError::CompilerNotFound(_)));
    }
}
