//! Core formatting trait and the plain text implementation

use crate::{
    error::{AppError, Result},
    export::ExportReport,
    parser::ParseStats,
};
use std::fmt::Write as _;
use std::path::Path;

/// Main trait for console run reports
pub trait ReportFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format parse statistics for one input file
    fn format_parse_summary(&self, input: &Path, stats: &ParseStats) -> Result<String>;

    /// Format the list of written files
    fn format_export_summary(&self, reports: &[ExportReport]) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Include parse statistics and file sizes
    pub verbose_mode: bool,
    /// Maximum number of skipped line numbers to list
    pub max_listed_lines: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
            max_listed_lines: 20,
        }
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }
}

pub(crate) fn fmt_error(e: std::fmt::Error) -> AppError {
    AppError::internal(format!("Failed to format report: {}", e))
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KIB {
        format!("{} B", bytes)
    } else if value < KIB * KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{:.1} MiB", value / (KIB * KIB))
    }
}

/// Comma-separated line numbers, truncated after `limit` entries
pub fn format_line_list(lines: &[usize], limit: usize) -> String {
    let mut listed: Vec<String> = lines.iter().take(limit).map(|n| n.to_string()).collect();
    if lines.len() > limit {
        listed.push(format!("... (+{} more)", lines.len() - limit));
    }
    listed.join(", ")
}

impl ReportFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(title.len() + 4);

        writeln!(output, "{}", border).map_err(fmt_error)?;
        writeln!(output, "  {}  ", title).map_err(fmt_error)?;
        write!(output, "{}", border).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_parse_summary(&self, input: &Path, stats: &ParseStats) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Parse Summary:").map_err(fmt_error)?;
        writeln!(output, "--------------").map_err(fmt_error)?;
        writeln!(output, "Input:            {}", input.display()).map_err(fmt_error)?;
        writeln!(output, "Lines read:       {}", stats.total_lines).map_err(fmt_error)?;
        writeln!(output, "Lines matched:    {}", stats.matched_lines).map_err(fmt_error)?;
        write!(output, "Interfaces:       {}", stats.records).map_err(fmt_error)?;

        if !stats.skipped_lines.is_empty() {
            write!(
                output,
                "\nSkipped lines:    {}",
                format_line_list(&stats.skipped_lines, self.options.max_listed_lines)
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
            if self.options.verbose_mode {
                write!(
                    output,
                    "  {:<5} {} ({})",
                    report.format.extension(),
                    report.path.display(),
                    format_bytes(report.bytes)
                )
                .map_err(fmt_error)?;
            } else {
                write!(output, "  {}", report.path.display()).map_err(fmt_error)?;
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("SUCCESS: {}", message))
    }
}
