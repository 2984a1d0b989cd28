//! Command-line help system with examples and topic guidance
//!
//! Topic pages cover output formats, the expected input, usage examples and
//! configuration sources.

use crate::config::env::EnvManager;
use crate::types::ExportFormat;
use colored::*;

/// Help system for the CLI application
pub struct HelpSystem {
    version: String,
}

impl HelpSystem {
    /// Topics accepted by `--help-topic`
    pub const TOPICS: [&'static str; 4] = ["formats", "input", "examples", "config"];

    /// Create a new help system
    pub fn new() -> Self {
        let version = match crate::GIT_COMMIT {
            Some(commit) => format!("{} ({}, built {})", crate::VERSION, commit, crate::BUILD_TIME),
            None => format!("{} (built {})", crate::VERSION, crate::BUILD_TIME),
        };
        Self { version }
    }

    /// Display the main help message
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_footer(use_colors));

        help
    }

    /// Display help for a single topic
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "formats" | "format" | "output" => Some(self.format_formats_help(use_colors)),
            "input" => Some(self.format_input_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            "config" | "configuration" | "env" => Some(self.format_configuration_help(use_colors)),
            _ => None,
        }
    }

    fn format_header(&self, use_colors: bool) -> String {
        let title = "QFX Convert";
        let subtitle = "Juniper flat configuration to interface table converter";

        if use_colors {
            format!(
                "{}\n{}\nVersion: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                self.version.green()
            )
        } else {
            format!("{}\n{}\nVersion: {}\n", title, subtitle, self.version)
        }
    }

    fn format_usage_section(&self, use_colors: bool) -> String {
        let mut usage = format!("{}\n", section_header("USAGE:", use_colors));
        for pattern in [
            "qfx-convert --file <PATH> [OPTIONS]",
            "qfx-convert --help-topic <TOPIC>",
        ] {
            if use_colors {
                usage.push_str(&format!("  {}\n", pattern.bright_white()));
            } else {
                usage.push_str(&format!("  {}\n", pattern));
            }
        }
        usage
    }

    fn format_options_section(&self, use_colors: bool) -> String {
        let options = [
            OptionHelp {
                short: Some("f"),
                long: "file",
                value: "<PATH>",
                description: "Configuration file in 'display set' format",
                example: Some("--file qfx5100.conf"),
            },
            OptionHelp {
                short: Some("o"),
                long: "output-dir",
                value: "<DIR>",
                description: "Write output files into this directory",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "formats",
                value: "<LIST>",
                description: "Comma-separated output formats (default: all)",
                example: Some("--formats json,csv"),
            },
            OptionHelp {
                short: None,
                long: "color / --no-color",
                value: "",
                description: "Force or disable colored output",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "verbose",
                value: "",
                description: "Show parse statistics and written files",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "debug",
                value: "",
                description: "Emit debug logs as JSON on stderr",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "help-topic",
                value: "<TOPIC>",
                description: "Show help for formats, input, examples or config",
                example: None,
            },
        ];

        let mut output = format!("{}\n", section_header("OPTIONS:", use_colors));
        for option in &options {
            output.push_str(&option.format(use_colors));
            output.push('\n');
        }
        output
    }

    fn format_examples_section(&self, use_colors: bool) -> String {
        let examples = [
            ExampleHelp {
                title: "Convert to every format",
                command: "qfx-convert --file configs/core-sw1.conf",
                description: "Writes configs/core-sw1_convert_to_.{txt,html,json,csv,xlsx}",
            },
            ExampleHelp {
                title: "Selected formats into another directory",
                command: "qfx-convert -f core-sw1.conf -o reports --formats json,xlsx",
                description: "Writes reports/core-sw1_convert_to_.json and .xlsx",
            },
            ExampleHelp {
                title: "Inspect what was parsed",
                command: "qfx-convert -f core-sw1.conf --verbose --no-color",
                description: "Prints line counts, skipped lines and every written file",
            },
        ];

        let mut output = format!("{}\n", section_header("EXAMPLES:", use_colors));
        for example in &examples {
            output.push_str(&example.format(use_colors));
            output.push('\n');
        }
        output
    }

    fn format_footer(&self, use_colors: bool) -> String {
        let topics = format!("More help: --help-topic {}", Self::TOPICS.join("|"));
        if use_colors {
            format!("{}\n", topics.bright_blue())
        } else {
            format!("{}\n", topics)
        }
    }

    fn format_formats_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", section_header("OUTPUT FORMATS", use_colors));

        for format in ExportFormat::ALL {
            help.push_str(&format!(
                "  {:<6} {:<12} <input>_convert_to_.{}\n",
                format.extension(),
                format.name(),
                format.extension()
            ));
        }

        help.push_str("\nColumns: interface, description, vlans, unit, ip and, when any\n");
        help.push_str("interface sets a switch-port mode, mode.\n");
        help.push_str("CSV uses ';' as delimiter and quotes every non-numeric field.\n");
        help.push_str("Purely numeric values such as unit 0 or a single VLAN like 20 are left\n");
        help.push_str("unquoted; VLAN lists (10,20) and ranges (30-35) stay quoted.\n");
        help
    }

    fn format_input_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", section_header("INPUT", use_colors));
        help.push_str("The input is a configuration shown with 'show configuration | display set'.\n");
        help.push_str("Recognised lines:\n");
        help.push_str("  set interfaces <if> description <text>           starts a record\n");
        help.push_str("  set interfaces irb unit <n> description <text>   starts an IRB unit record\n");
        help.push_str("  ... ethernet-switching interface-mode <mode>     sets mode\n");
        help.push_str("  ... vlan members <vlan>                          appends a VLAN\n");
        help.push_str("  set interfaces <if> unit <n> family inet address <a.b.c.d/len>\n");
        help.push_str("\nA record only receives lines of its own interface (and unit for addresses).\n");
        help.push_str("Other lines are ignored.\n");
        help
    }

    fn format_configuration_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", section_header("CONFIGURATION", use_colors));
        help.push_str(&EnvManager::display_env_help());
        help.push_str("\nEXAMPLE .env FILE:\n");
        help.push_str(&EnvManager::create_example_env_content());
        help
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn section_header(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bright_green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Helper struct for formatting individual options
struct OptionHelp {
    short: Option<&'static str>,
    long: &'static str,
    value: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

impl OptionHelp {
    fn format(&self, use_colors: bool) -> String {
        let mut option_str = String::new();

        if let Some(short) = self.short {
            if use_colors {
                option_str.push_str(&format!("  {}, ", format!("-{}", short).bright_cyan()));
            } else {
                option_str.push_str(&format!("  -{}, ", short));
            }
        } else {
            option_str.push_str("      ");
        }

        let long_with_value = if self.value.is_empty() {
            format!("--{}", self.long)
        } else {
            format!("--{} {}", self.long, self.value)
        };

        if use_colors {
            option_str.push_str(&format!("{:<30} {}", long_with_value.bright_cyan(), self.description.white()));
        } else {
            option_str.push_str(&format!("{:<30} {}", long_with_value, self.description));
        }

        if let Some(example) = self.example {
            if use_colors {
                option_str.push_str(&format!(
                    "\n{}{}",
                    " ".repeat(36),
                    format!("Example: {}", example).bright_blue().italic()
                ));
            } else {
                option_str.push_str(&format!("\n{}Example: {}", " ".repeat(36), example));
            }
        }

        option_str
    }
}

/// Helper struct for formatting examples
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!(
                "  {}:\n    {}\n    {}\n",
                self.title.bright_yellow().bold(),
                self.command.bright_white(),
                self.description.bright_blue().italic()
            )
        } else {
            format!("  {}:\n    {}\n    {}\n", self.title, self.command, self.description)
        }
    }
}
