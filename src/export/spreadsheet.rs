//! Single-sheet XLSX writer

use super::{FormatWriter, RecordTable};
use crate::error::{AppError, Result};
use crate::types::ExportFormat;
use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use std::io::Write;

/// Name of the only worksheet
pub const SHEET_NAME: &str = "Sheet1";

/// Writes a workbook with a bold header row and one string cell per field
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWriter;

impl XlsxWriter {
    /// Build the workbook bytes
    pub fn to_bytes(&self, table: &RecordTable<'_>) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in table.columns().iter().enumerate() {
            worksheet.write_string_with_format(0, column_number(col)?, *header, &header_format)?;
        }

        for (row_idx, row) in table.rows().enumerate() {
            let row_num = u32::try_from(row_idx + 1)
                .map_err(|_| AppError::export("Too many rows for a worksheet"))?;
            for (col, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet.write_string(row_num, column_number(col)?, *value)?;
            }
        }

        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }
}

fn column_number(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| AppError::export("Too many columns for a worksheet"))
}

impl FormatWriter for XlsxWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()> {
        let bytes = self.to_bytes(table)?;
        out.write_all(&bytes)
            .map_err(|e| AppError::io(format!("Failed to write spreadsheet: {}", e)))
    }
}
