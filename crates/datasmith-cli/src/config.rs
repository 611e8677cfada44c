use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use datasmith_generate::{DEFAULT_MAX_ROWS, ExportFormat, GenerateOptions};

use crate::logging::LogFormat;

pub const CONFIG_FILE: &str = "datasmith.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from `datasmith.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_rows: u64,
    pub default_format: ExportFormat,
    pub strict_references: bool,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            default_format: ExportFormat::Csv,
            strict_references: false,
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn generate_options(&self, strict: bool) -> GenerateOptions {
        GenerateOptions {
            max_rows: self.max_rows,
            strict_references: strict || self.strict_references,
        }
    }
}

/// Load settings from an explicit path, or from `datasmith.toml` in the
/// working directory when present. A missing default file yields defaults;
/// a missing explicit file is an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };
    if !required && !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_settings(&content).map_err(|source| ConfigError::Toml { path, source })
}

pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("").expect("parse empty");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_overrides_selected_keys() {
        let settings = parse_settings(
            r#"
max_rows = 500
default_format = "sql"
log_format = "json"
"#,
        )
        .expect("parse settings");
        assert_eq!(settings.max_rows, 500);
        assert_eq!(settings.default_format, ExportFormat::Sql);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(!settings.strict_references);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn strict_flag_or_setting_enables_strict_references() {
        let settings = Settings::default();
        assert!(!settings.generate_options(false).strict_references);
        assert!(settings.generate_options(true).strict_references);

        let settings = parse_settings("strict_references = true").expect("parse");
        assert!(settings.generate_options(false).strict_references);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(parse_settings(r#"default_format = "xlsx""#).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("datasmith-does-not-exist.toml");
        assert!(matches!(
            load_settings(Some(&path)),
            Err(ConfigError::Io { .. })
        ));
    }
}
