//! Semicolon-delimited CSV writer

use super::{FormatWriter, RecordTable};
use crate::error::Result;
use crate::types::ExportFormat;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Writes a header row and one row per record; non-numeric fields are quoted
#[derive(Debug, Clone, Copy)]
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    /// Create a writer with a custom delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::with_delimiter(crate::defaults::CSV_DELIMITER)
    }
}

impl FormatWriter for CsvWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::NonNumeric)
            .terminator(Terminator::CRLF)
            .from_writer(out);

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(())
    }
}
