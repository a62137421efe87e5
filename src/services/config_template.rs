//! Starter configuration files shipped with the binary.

use include_dir::{Dir, include_dir};

use crate::domain::config::paths::CONFIG_STEM;
use crate::domain::{AppError, ConfigFormat, ConfigRoot};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Starter document for `format`.
///
/// Formats with an annotated template get it verbatim; the rest are the
/// default configuration rendered in that format.
pub fn starter_config(format: ConfigFormat) -> Result<String, AppError> {
    let name = format!("{}.{}", CONFIG_STEM, format.extension());
    match TEMPLATES_DIR.get_file(&name).and_then(|file| file.contents_utf8()) {
        Some(content) => Ok(content.to_string()),
        None => format.render(&ConfigRoot::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_starter_parses_to_the_default_config() {
        for format in ConfigFormat::ALL {
            let content = starter_config(format).unwrap();
            assert_eq!(
                format.parse(&content).unwrap(),
                ConfigRoot::default(),
                "{} starter drifted from ConfigRoot::default()",
                format
            );
        }
    }

    #[test]
    fn toml_starter_is_annotated() {
        let content = starter_config(ConfigFormat::Toml).unwrap();
        assert!(content.starts_with("# chaincfg"));
        assert!(content.contains("# \"*\" accepts any chain id"));
    }
}
