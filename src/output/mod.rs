//! Console reporting of a conversion run
//!
//! Formatters turn parse statistics and written files into the text printed
//! at the end of a run, with or without terminal colors.

mod colored;
mod formatter;

pub use self::colored::{ColorScheme, ColoredFormatter};
pub use formatter::{format_bytes, FormattingOptions, PlainFormatter, ReportFormatter};

use crate::{error::Result, export::ExportReport, parser::ParseStats};
use std::path::Path;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
            ..FormattingOptions::default()
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn ReportFormatter> {
        Self::create_formatter(false, true)
    }
}

/// Builds the end-of-run report
pub struct OutputCoordinator {
    formatter: Box<dyn ReportFormatter>,
    verbose: bool,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn ReportFormatter>, verbose: bool) -> Self {
        Self { formatter, verbose }
    }

    /// Report for a successful conversion
    pub fn display_run(&self, input: &Path, stats: &ParseStats, reports: &[ExportReport]) -> Result<String> {
        let mut output = String::new();

        if self.verbose {
            output.push_str(&self.formatter.format_header("QFX Convert Results")?);
            output.push_str("\n\n");
            output.push_str(&self.formatter.format_parse_summary(input, stats)?);
            output.push_str("\n\n");
        }

        if !stats.skipped_lines.is_empty() {
            output.push_str(&self.formatter.format_warning(&format!(
                "{} line(s) with a known keyword could not be parsed",
                stats.skipped_lines.len()
            ))?);
            output.push('\n');
        }

        output.push_str(&self.formatter.format_success(&format!(
            "Converted {} interface record(s) into {} file(s)",
            stats.records,
            reports.len()
        ))?);
        output.push('\n');
        output.push_str(&self.formatter.format_export_summary(reports)?);

        Ok(output)
    }
}
