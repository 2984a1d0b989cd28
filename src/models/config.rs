//! Configuration data model and validation

use crate::logging::LogFormat;
use crate::types::{AppError, ExportFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable names understood by the converter
pub mod env_keys {
    pub const OUTPUT_DIR: &str = "QFX_OUTPUT_DIR";
    pub const FORMATS: &str = "QFX_FORMATS";
    pub const ENABLE_COLOR: &str = "QFX_ENABLE_COLOR";
    pub const LOG_FORMAT: &str = "QFX_LOG_FORMAT";
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for output files; `None` writes next to the input file
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Formats to export, in write order
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            formats: default_formats(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(AppError::config("At least one output format is required"));
        }

        for (idx, format) in self.formats.iter().enumerate() {
            if self.formats[..idx].contains(format) {
                return Err(AppError::config(format!("Output format '{}' listed more than once", format)));
            }
        }

        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(AppError::config("Output directory cannot be empty"));
            }
            if dir.exists() && !dir.is_dir() {
                return Err(AppError::config(format!(
                    "Output path '{}' exists and is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Merge values produced by `lookup` (keyed by environment variable name)
    pub fn merge_from_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(env_keys::OUTPUT_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                self.output_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(formats) = lookup(env_keys::FORMATS) {
            self.formats = ExportFormat::parse_list(&formats)
                .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", env_keys::FORMATS, formats, e)))?;
        }

        if let Some(enable_color) = lookup(env_keys::ENABLE_COLOR) {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", env_keys::ENABLE_COLOR, enable_color, e)))?;
        }

        if lookup(env_keys::NO_COLOR).is_some() {
            self.enable_color = false;
        }

        if let Some(log_format) = lookup(env_keys::LOG_FORMAT) {
            self.log_format = log_format.parse()
                .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", env_keys::LOG_FORMAT, log_format, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_formats() -> Vec<ExportFormat> {
    crate::defaults::DEFAULT_FORMATS.to_vec()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.formats, ExportFormat::ALL.to_vec());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_empty_formats_invalid() {
        let mut config = Config::default();
        config.formats.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_formats_invalid() {
        let mut config = Config::default();
        config.formats = vec![ExportFormat::Json, ExportFormat::Json];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_output_dir_pointing_at_file_invalid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.output_dir = Some(file.path().to_path_buf());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_from_lookup() {
        let mut config = Config::default();
        config
            .merge_from_lookup(lookup_from(&[
                ("QFX_OUTPUT_DIR", "/tmp/out"),
                ("QFX_FORMATS", "json,csv"),
                ("QFX_ENABLE_COLOR", "false"),
                ("QFX_LOG_FORMAT", "compact"),
            ]))
            .unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.formats, vec![ExportFormat::Json, ExportFormat::Csv]);
        assert!(!config.enable_color);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_no_color_overrides_enable_color() {
        let mut config = Config::default();
        config
            .merge_from_lookup(lookup_from(&[("QFX_ENABLE_COLOR", "true"), ("NO_COLOR", "")]))
            .unwrap();
        assert!(!config.enable_color);
    }

    #[test]
    fn test_invalid_env_values_rejected() {
        let mut config = Config::default();
        assert!(config.merge_from_lookup(lookup_from(&[("QFX_FORMATS", "pdf")])).is_err());

        let mut config = Config::default();
        assert!(config.merge_from_lookup(lookup_from(&[("QFX_ENABLE_COLOR", "maybe")])).is_err());
    }
}
