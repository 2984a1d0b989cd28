//! Bordered grid table writer
//!
//! Renders records as a text table with `+---+` borders, a `+===+` header
//! separator and a border line between every row.

use super::{FormatWriter, RecordTable};
use crate::error::{AppError, Result};
use crate::types::ExportFormat;
use std::io::Write;

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
}

/// Grid table layout
#[derive(Debug, Clone)]
pub struct GridTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    /// Extra width reserved around each header
    header_padding: usize,
}

impl GridTable {
    /// Build a grid layout from a record table
    pub fn from_records(table: &RecordTable<'_>) -> Self {
        let columns = table
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, header)| Column {
                header: header.to_string(),
                alignment: if table.is_numeric_column(idx) {
                    Alignment::Right
                } else {
                    Alignment::Left
                },
            })
            .collect();

        let rows = table
            .rows()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect();

        Self {
            columns,
            rows,
            header_padding: 2,
        }
    }

    /// Render the table
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str(&self.create_horizontal_border(&widths, '-'));
        output.push('\n');

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        output.push_str(&self.create_row(&headers, &widths));
        output.push('\n');
        output.push_str(&self.create_horizontal_border(&widths, '='));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.create_row(row, &widths));
            output.push('\n');
            output.push_str(&self.create_horizontal_border(&widths, '-'));
            output.push('\n');
        }

        output
    }

    /// Calculate column widths from headers and content
    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| display_width(cell))
                    .max()
                    .unwrap_or(0);
                content.max(display_width(&column.header) + self.header_padding)
            })
            .collect()
    }

    /// Create a table row
    fn create_row(&self, data: &[String], widths: &[usize]) -> String {
        let mut row = String::from("|");

        for (idx, width) in widths.iter().enumerate() {
            let cell = data.get(idx).map(String::as_str).unwrap_or("");
            let alignment = self.columns.get(idx).map_or(Alignment::Left, |c| c.alignment);
            row.push(' ');
            row.push_str(&align_text(cell, *width, alignment));
            row.push_str(" |");
        }

        row
    }

    /// Create horizontal border for table
    fn create_horizontal_border(&self, widths: &[usize], fill: char) -> String {
        let mut border = String::from("+");
        for &width in widths {
            border.extend(std::iter::repeat(fill).take(width + 2));
            border.push('+');
        }
        border
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Align text within specified width
fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let padding = width.saturating_sub(display_width(text));
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
    }
}

/// Writes the grid table as UTF-8 text
#[derive(Debug, Default, Clone, Copy)]
pub struct GridWriter;

impl FormatWriter for GridWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Txt
    }

    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()> {
        let rendered = GridTable::from_records(table).render();
        out.write_all(rendered.as_bytes())
            .map_err(|e| AppError::io(format!("Failed to write grid table: {}", e)))
    }
}
