//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::logging::LogFormat;
use crate::models::config::env_keys;
use crate::types::ExportFormat;
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists; returns whether one was loaded
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new(".env"))
    }

    /// Load a specific env file if it exists
    pub fn load_env_file_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;
        Ok(true)
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# QFX Convert Configuration
#
# Values here are used as defaults and can be overridden by environment
# variables and command-line arguments.

# Directory for output files (default: next to the input file)
# QFX_OUTPUT_DIR=reports

# Output formats to write (comma-separated: txt,html,json,csv,xlsx)
# QFX_FORMATS=txt,html,json,csv,xlsx

# Enable colored output (true/false)
# QFX_ENABLE_COLOR=true

# Log line format (console, json, compact)
# QFX_LOG_FORMAT=console
"#
        .to_string()
    }

    /// Validate an environment variable value before it is merged
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            env_keys::OUTPUT_DIR => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", key)));
                }
            }
            env_keys::FORMATS => {
                ExportFormat::parse_list(value)
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            env_keys::ENABLE_COLOR => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            env_keys::LOG_FORMAT => {
                value.parse::<LogFormat>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (env_keys::OUTPUT_DIR, "Directory for output files", "reports"),
            (env_keys::FORMATS, "Comma-separated output formats", "json,csv,xlsx"),
            (env_keys::ENABLE_COLOR, "Enable colored output", "true"),
            (env_keys::LOG_FORMAT, "Log format (console, json, compact)", "compact"),
            (env_keys::NO_COLOR, "Disable colored output when set", "1"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<18} {}\n", var, description));
            help.push_str(&format!("  {:<18} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Check an env file's entries; `None` when the file does not exist
    pub fn check_env_file(path: &Path) -> Result<Option<Vec<String>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut warnings = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                if let Err(e) = Self::validate_env_var(key.trim(), value.trim()) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        Ok(Some(warnings))
    }
}
