//! Configuration loading from defaults, .env, environment and CLI arguments

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::{AppError, Result},
    models::Config,
    types::ExportFormat,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        EnvManager::load_env_file()?;
        self.parse_with_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an explicit environment lookup
    pub fn parse_with_lookup<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        config.merge_from_lookup(lookup)?;
        self.apply_cli_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(ref dir) = self.cli.output_dir {
            config.output_dir = Some(dir.clone());
        }

        if let Some(ref formats) = self.cli.formats {
            config.formats = ExportFormat::parse_list(formats)?;
        }

        config.enable_color = self.cli.color_choice(config.enable_color);

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    cli.validate().map_err(AppError::validation)?;
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let formats: Vec<&str> = config.formats.iter().map(|f| f.extension()).collect();
    let output_dir = config
        .output_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(next to input)".to_string());

    [
        format!("Output directory: {}", output_dir),
        format!("Formats: {}", formats.join(", ")),
        format!("Color Output: {}", config.enable_color),
        format!("Log Format: {:?}", config.log_format),
        format!("Verbose: {}", config.verbose),
        format!("Debug: {}", config.debug),
    ]
    .join("\n")
}
