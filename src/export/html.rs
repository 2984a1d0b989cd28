//! HTML table writer

use super::{FormatWriter, RecordTable};
use crate::error::{AppError, Result};
use crate::types::ExportFormat;
use std::fmt::Write as _;
use std::io::Write;

/// Writes records as a bare `<table>` element
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlWriter;

impl HtmlWriter {
    /// Render the table markup
    pub fn render(&self, table: &RecordTable<'_>) -> Result<String> {
        let mut html = String::new();
        let numeric: Vec<bool> = (0..table.columns().len())
            .map(|idx| table.is_numeric_column(idx))
            .collect();

        writeln!(html, "<table>").map_err(fmt_error)?;
        writeln!(html, "<thead>").map_err(fmt_error)?;
        html.push_str("<tr>");
        for (idx, header) in table.columns().iter().enumerate() {
            write!(html, "<th{}>{}</th>", align_attr(numeric[idx]), escape(header)).map_err(fmt_error)?;
        }
        html.push_str("</tr>\n");
        writeln!(html, "</thead>").map_err(fmt_error)?;

        writeln!(html, "<tbody>").map_err(fmt_error)?;
        for row in table.rows() {
            html.push_str("<tr>");
            for (idx, cell) in row.iter().enumerate() {
                write!(html, "<td{}>{}</td>", align_attr(numeric[idx]), escape(cell)).map_err(fmt_error)?;
            }
            html.push_str("</tr>\n");
        }
        writeln!(html, "</tbody>").map_err(fmt_error)?;
        writeln!(html, "</table>").map_err(fmt_error)?;

        Ok(html)
    }
}

impl FormatWriter for HtmlWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()> {
        let html = self.render(table)?;
        out.write_all(html.as_bytes())
            .map_err(|e| AppError::io(format!("Failed to write HTML table: {}", e)))
    }
}

fn fmt_error(e: std::fmt::Error) -> AppError {
    AppError::export(format!("Failed to format HTML table: {}", e))
}

fn align_attr(numeric: bool) -> &'static str {
    if numeric {
        r#" style="text-align: right;""#
    } else {
        ""
    }
}

/// Escape text for element content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
