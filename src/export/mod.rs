//! Export of interface records to files
//!
//! Every output format is a [`FormatWriter`]. Writers are collected in a
//! [`WriterRegistry`] and run uniformly by the [`Exporter`], each one into its
//! own file named `<base>.<extension>`.

mod delimited;
mod grid;
mod html;
mod json;
mod spreadsheet;

pub use delimited::CsvWriter;
pub use grid::{Alignment, Column, GridTable, GridWriter};
pub use html::HtmlWriter;
pub use json::{read_json_records, JsonWriter};
pub use spreadsheet::{XlsxWriter, SHEET_NAME};

use crate::error::{AppError, Result};
use crate::models::{Config, InterfaceRecord, FIELD_KEYS};
use crate::types::ExportFormat;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const EMPTY_MESSAGE: &str = "no interface records were parsed";

/// A non-empty record sequence with its column set
#[derive(Debug, Clone)]
pub struct RecordTable<'a> {
    columns: Vec<&'static str>,
    records: &'a [InterfaceRecord],
}

impl<'a> RecordTable<'a> {
    /// Build the table; fails with `EmptyResult` when there are no records.
    ///
    /// Columns are the first record's keys, followed by any key that only
    /// later records carry.
    pub fn new(records: &'a [InterfaceRecord]) -> Result<Self> {
        let first = records
            .first()
            .ok_or_else(|| AppError::empty_result(EMPTY_MESSAGE))?;

        let mut columns = first.keys();
        for key in FIELD_KEYS {
            if !columns.contains(&key) && records.iter().any(|r| r.field(key).is_some()) {
                columns.push(key);
            }
        }

        Ok(Self { columns, records })
    }

    /// Column keys
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Records in source order
    pub fn records(&self) -> &'a [InterfaceRecord] {
        self.records
    }

    /// Cell values per record, missing fields as empty strings
    pub fn rows(&self) -> impl Iterator<Item = Vec<&'a str>> + '_ {
        self.records.iter().map(move |record| {
            self.columns
                .iter()
                .map(|column| record.field(column).unwrap_or(""))
                .collect()
        })
    }

    /// Whether every non-empty value in a column is a number
    pub fn is_numeric_column(&self, idx: usize) -> bool {
        let Some(column) = self.columns.get(idx) else {
            return false;
        };

        let mut values = self
            .records
            .iter()
            .filter_map(|r| r.field(column))
            .filter(|v| !v.is_empty())
            .peekable();

        values.peek().is_some() && values.all(|v| v.parse::<f64>().is_ok())
    }
}

/// A serializer for one output format
pub trait FormatWriter {
    /// Format produced by this writer
    fn format(&self) -> ExportFormat;

    /// Serialize the table into `out`
    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()>;
}

/// Render records into memory
pub fn render_to_vec(writer: &dyn FormatWriter, records: &[InterfaceRecord]) -> Result<Vec<u8>> {
    let table = RecordTable::new(records)?;
    let mut buffer = Vec::new();
    writer.write_table(&table, &mut buffer)?;
    Ok(buffer)
}

/// Write records to `path`, returning the number of bytes written
pub fn write_records(writer: &dyn FormatWriter, records: &[InterfaceRecord], path: &Path) -> Result<u64> {
    let table = RecordTable::new(records)?;

    {
        let file = File::create(path)
            .map_err(|e| AppError::io(format!("Failed to create {}: {}", path.display(), e)))?;
        let mut out = BufWriter::new(file);
        writer.write_table(&table, &mut out)?;
        out.flush()
            .map_err(|e| AppError::io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    let metadata = fs::metadata(path)
        .map_err(|e| AppError::io(format!("Failed to inspect {}: {}", path.display(), e)))?;
    Ok(metadata.len())
}

/// Create the writer for a format
pub fn writer_for(format: ExportFormat) -> Box<dyn FormatWriter> {
    match format {
        ExportFormat::Txt => Box::new(GridWriter),
        ExportFormat::Html => Box::new(HtmlWriter),
        ExportFormat::Json => Box::new(JsonWriter),
        ExportFormat::Csv => Box::new(CsvWriter::default()),
        ExportFormat::Xlsx => Box::new(XlsxWriter),
    }
}

/// Ordered set of writers, at most one per format
#[derive(Default)]
pub struct WriterRegistry {
    writers: Vec<Box<dyn FormatWriter>>,
}

impl WriterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in writer
    pub fn with_defaults() -> Self {
        Self::for_formats(&ExportFormat::ALL)
    }

    /// Registry with the built-in writers for `formats`
    pub fn for_formats(formats: &[ExportFormat]) -> Self {
        let mut registry = Self::new();
        for format in formats {
            registry.register(writer_for(*format));
        }
        registry
    }

    /// Add a writer, replacing any writer registered for the same format
    pub fn register(&mut self, writer: Box<dyn FormatWriter>) -> &mut Self {
        match self.writers.iter().position(|w| w.format() == writer.format()) {
            Some(idx) => self.writers[idx] = writer,
            None => self.writers.push(writer),
        }
        self
    }

    /// Registered writers in run order
    pub fn writers(&self) -> impl Iterator<Item = &dyn FormatWriter> + '_ {
        self.writers.iter().map(|w| w.as_ref())
    }

    /// Registered formats in run order
    pub fn formats(&self) -> Vec<ExportFormat> {
        self.writers.iter().map(|w| w.format()).collect()
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

/// Result of one written file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Output path prefix for an input file: `<dir>/<stem>_convert_to_`
pub fn output_base(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));

    let mut name = stem;
    name.push(crate::defaults::OUTPUT_SUFFIX);

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Runs every registered writer against one record sequence
pub struct Exporter {
    base: PathBuf,
    registry: WriterRegistry,
}

impl Exporter {
    /// Create an exporter writing to `<base>.<extension>`
    pub fn new(base: PathBuf, registry: WriterRegistry) -> Self {
        Self { base, registry }
    }

    /// Create an exporter for an input file using configured formats and directory
    pub fn from_config(input: &Path, config: &Config) -> Self {
        Self::new(
            output_base(input, config.output_dir.as_deref()),
            WriterRegistry::for_formats(&config.formats),
        )
    }

    /// Output path prefix
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Registered writers
    pub fn registry(&self) -> &WriterRegistry {
        &self.registry
    }

    /// Path of the file written for `format`
    pub fn output_path(&self, format: ExportFormat) -> PathBuf {
        let mut path: OsString = self.base.clone().into_os_string();
        path.push(".");
        path.push(format.extension());
        PathBuf::from(path)
    }

    /// Write every format; stops at the first failure
    pub fn export_all(&self, records: &[InterfaceRecord]) -> Result<Vec<ExportReport>> {
        if records.is_empty() {
            return Err(AppError::empty_result(EMPTY_MESSAGE));
        }
        if self.registry.is_empty() {
            return Err(AppError::config("No output formats selected"));
        }

        if let Some(dir) = self.base.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| AppError::io(format!("Failed to create {}: {}", dir.display(), e)))?;
            }
        }

        self.registry
            .writers()
            .map(|writer| {
                let path = self.output_path(writer.format());
                let bytes = write_records(writer, records, &path)?;
                Ok(ExportReport {
                    format: writer.format(),
                    path,
                    bytes,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<InterfaceRecord> {
        let mut uplink = InterfaceRecord::new("ge-0/0/1", "Uplink", "0");
        uplink.push_vlan("100");
        uplink.mode = Some("trunk".to_string());
        vec![uplink, InterfaceRecord::new("lo0", "Loopback", "0")]
    }

    #[test]
    fn test_record_table_rejects_empty() {
        let err = RecordTable::new(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyResult(_)));
    }

    #[test]
    fn test_columns_follow_first_record_then_extras() {
        let mut later_mode = records();
        later_mode.reverse();
        let table = RecordTable::new(&later_mode).unwrap();
        assert_eq!(table.columns(), &["interface", "description", "vlans", "unit", "ip", "mode"]);

        let plain = vec![InterfaceRecord::new("lo0", "Loopback", "0")];
        let table = RecordTable::new(&plain).unwrap();
        assert_eq!(table.columns(), &["interface", "description", "vlans", "unit", "ip"]);
    }

    #[test]
    fn test_rows_fill_missing_fields() {
        let recs = records();
        let table = RecordTable::new(&recs).unwrap();
        let rows: Vec<Vec<&str>> = table.rows().collect();
        assert_eq!(rows[0], vec!["ge-0/0/1", "Uplink", "100", "0", "", "trunk"]);
        assert_eq!(rows[1], vec!["lo0", "Loopback", "", "0", "", ""]);
    }

    #[test]
    fn test_numeric_columns() {
        let recs = records();
        let table = RecordTable::new(&recs).unwrap();
        assert!(!table.is_numeric_column(0));
        assert!(table.is_numeric_column(2)); // vlans: "100" and empty
        assert!(table.is_numeric_column(3));
        assert!(!table.is_numeric_column(4)); // ip: all empty
        assert!(!table.is_numeric_column(42));
    }

    #[test]
    fn test_every_writer_reports_empty_input() {
        for writer in WriterRegistry::with_defaults().writers() {
            let err = render_to_vec(writer, &[]).unwrap_err();
            assert!(matches!(err, AppError::EmptyResult(_)), "{} did not report empty input", writer.format());
        }
    }

    #[test]
    fn test_registry_replaces_same_format() {
        let mut registry = WriterRegistry::for_formats(&[ExportFormat::Csv, ExportFormat::Json]);
        registry.register(Box::new(CsvWriter::with_delimiter(b',')));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.formats(), vec![ExportFormat::Csv, ExportFormat::Json]);
        assert_eq!(WriterRegistry::with_defaults().formats(), ExportFormat::ALL.to_vec());
    }

    #[test]
    fn test_output_base_naming() {
        assert_eq!(
            output_base(Path::new("configs/qfx1.conf"), None),
            PathBuf::from("configs/qfx1_convert_to_")
        );
        assert_eq!(
            output_base(Path::new("configs/qfx1.conf"), Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out/qfx1_convert_to_")
        );
        assert_eq!(output_base(Path::new("qfx1"), None), PathBuf::from("qfx1_convert_to_"));
    }

    #[test]
    fn test_output_path_keeps_dots_in_base() {
        let exporter = Exporter::new(PathBuf::from("out/sw.v2_convert_to_"), WriterRegistry::new());
        assert_eq!(
            exporter.output_path(ExportFormat::Json),
            PathBuf::from("out/sw.v2_convert_to_.json")
        );
    }

    #[test]
    fn test_export_all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("sw_convert_to_"), WriterRegistry::with_defaults());

        let reports = exporter.export_all(&records()).unwrap();
        assert_eq!(reports.len(), 5);
        for report in &reports {
            assert!(report.path.exists());
            assert!(report.bytes > 0);
            assert_eq!(report.path.extension().unwrap(), report.format.extension());
        }
    }

    #[test]
    fn test_export_all_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("sw_convert_to_");
        let exporter = Exporter::new(base, WriterRegistry::for_formats(&[ExportFormat::Txt]));

        let reports = exporter.export_all(&records()).unwrap();
        assert!(reports[0].path.exists());
    }

    #[test]
    fn test_export_all_empty_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("sw_convert_to_"), WriterRegistry::with_defaults());

        let err = exporter.export_all(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyResult(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_all_without_writers() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("sw_convert_to_"), WriterRegistry::new());
        assert!(matches!(exporter.export_all(&records()).unwrap_err(), AppError::Config(_)));
    }
}
