use std::path::{Path, PathBuf};

use super::ConfigFormat;

/// Stem shared by every configuration file name.
pub const CONFIG_STEM: &str = "chaincfg";

/// Recognized file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 4] =
    ["chaincfg.toml", "chaincfg.json", "chaincfg.yaml", "chaincfg.yml"];

/// `<dir>/chaincfg.<ext>`
pub fn config_file(dir: &Path, format: ConfigFormat) -> PathBuf {
    dir.join(format!("{}.{}", CONFIG_STEM, format.extension()))
}

/// Every candidate configuration path inside `dir`.
pub fn candidates(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))
}
