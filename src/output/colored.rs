//! Colored formatter implementation with terminal color support

use super::formatter::{fmt_error, format_bytes, format_line_list, FormattingOptions, ReportFormatter};
use crate::{error::Result, export::ExportReport, parser::ParseStats};
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_color_scheme(options, ColorScheme::default())
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self { options, color_scheme }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    fn label(&self, text: &str) -> ColoredString {
        self.colorize(text, self.color_scheme.muted)
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "═".repeat(title.chars().count() + 4);

        writeln!(output, "{}", self.colorize(&border, self.color_scheme.header)).map_err(fmt_error)?;
        writeln!(output, "  {}  ", self.colorize(title, self.color_scheme.header).bold()).map_err(fmt_error)?;
        write!(output, "{}", self.colorize(&border, self.color_scheme.header)).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_parse_summary(&self, input: &Path, stats: &ParseStats) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.colorize("📄 Parse Summary", self.color_scheme.info).bold()).map_err(fmt_error)?;
        writeln!(output, "  {} {}", self.label("Input:        "), input.display()).map_err(fmt_error)?;
        writeln!(output, "  {} {}", self.label("Lines read:   "), stats.total_lines).map_err(fmt_error)?;
        writeln!(output, "  {} {}", self.label("Lines matched:"), stats.matched_lines).map_err(fmt_error)?;
        write!(
            output,
            "  {} {}",
            self.label("Interfaces:   "),
            self.colorize(&stats.records.to_string(), self.color_scheme.success).bold()
        )
        .map_err(fmt_error)?;

        if !stats.skipped_lines.is_empty() {
            let listed = format_line_list(&stats.skipped_lines, self.options.max_listed_lines);
            write!(
                output,
                "\n  {} {}",
                self.label("Skipped lines:"),
                self.colorize(&listed, self.color_scheme.warning)
            )
            .map_err(fmt_error)?;
        }

        Ok(output)
    }

    fn format_export_summary(&self, reports: &[ExportReport]) -> Result<String> {
        let mut output = String::new();

        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let path = report.path.display().to_string();
            if self.options.verbose_mode {
                write!(
                    output,
                    "  {} {} {}",
                    self.colorize(&format!("{:<5}", report.format.extension()), self.color_scheme.info),
                    path,
                    self.label(&format!("({})", format_bytes(report.bytes)))
                )
                .map_err(fmt_error)?;
            } else {
                write!(output, "  {}", path).map_err(fmt_error)?;
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", "❌".red(), self.colorize(error, self.color_scheme.error)))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "⚠️".yellow(), self.colorize(warning, self.color_scheme.warning)))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("{} {}", "✅".green(), self.colorize(message, self.color_scheme.success)))
    }
}
