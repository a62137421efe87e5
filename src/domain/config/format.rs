//! Pure parse/render for configuration documents.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;

use super::ConfigRoot;
use crate::domain::AppError;

/// On-disk configuration format, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 3] = [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml];

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        extension.parse().map_err(|_| AppError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    pub fn parse(&self, content: &str) -> Result<ConfigRoot, AppError> {
        let parse_error = |details: String| AppError::ParseError {
            what: format!("{} configuration", self),
            details,
        };

        match self {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    pub fn render(&self, config: &ConfigRoot) -> Result<String, AppError> {
        let render_error =
            |details: String| AppError::RenderError { format: self.to_string(), details };

        match self {
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| render_error(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| render_error(e.to_string())),
            ConfigFormat::Yaml => {
                serde_yaml::to_string(config).map_err(|e| render_error(e.to_string()))
            }
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ConfigFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}
