//! Command-line interface module with topic help

pub mod help;

pub use help::HelpSystem;

use crate::types::ExportFormat;
use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// QFX Convert - turn a Junos flat configuration into interface tables
#[derive(Parser, Debug, Clone)]
#[command(name = "qfx-convert")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file in `display set` format
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory for output files (defaults to the input file's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output formats (comma-separated: txt,html,json,csv,xlsx)
    #[arg(long, value_name = "LIST")]
    pub formats: Option<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (formats, input, examples, config)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.help_topic.is_some() {
            return Ok(());
        }

        if self.file.is_none() {
            return Err("Must specify an input file via --file".to_string());
        }

        if let Some(ref formats) = self.formats {
            ExportFormat::parse_list(formats)
                .map_err(|e| format!("Invalid --formats value '{}': {}", formats, e))?;
        }

        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        self.color_choice(crate::defaults::DEFAULT_ENABLE_COLOR)
    }

    /// Resolve colored output: the flags win, otherwise `configured` applies
    /// only when the terminal supports color
    pub fn color_choice(&self, configured: bool) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            configured && supports_color()
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system.display_topic_help(topic, use_colors).unwrap_or_else(|| {
                format!(
                    "Unknown help topic: '{}'\n\nAvailable topics: {}\n\n{}",
                    topic,
                    HelpSystem::TOPICS.join(", "),
                    help_system.display_main_help(use_colors)
                )
            })
        } else {
            help_system.display_main_help(use_colors)
        }
    }
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
