//! Type definitions and aliases

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Output formats the exporter can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Bordered grid table
    Txt,
    /// HTML table
    Html,
    /// Pretty-printed JSON array
    Json,
    /// Semicolon-delimited CSV
    Csv,
    /// Single-sheet spreadsheet
    Xlsx,
}

impl ExportFormat {
    /// All formats, in the order they are written
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Txt,
        ExportFormat::Html,
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Xlsx,
    ];

    /// File extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "grid text",
            ExportFormat::Html => "HTML table",
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "spreadsheet",
        }
    }

    /// Parse a comma-separated list such as `json,csv`
    pub fn parse_list(value: &str) -> Result<Vec<ExportFormat>> {
        let mut formats = Vec::new();
        for item in value.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let format = item.parse::<ExportFormat>()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }

        if formats.is_empty() {
            return Err(AppError::validation(format!("No output formats in '{}'", value)));
        }

        Ok(formats)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Txt),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "xls" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::validation(format!(
                "Unknown output format '{}' (expected txt, html, json, csv or xlsx)",
                other
            ))),
        }
    }
}
