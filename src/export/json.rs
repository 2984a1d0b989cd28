//! JSON writer and reader

use super::{FormatWriter, RecordTable};
use crate::error::Result;
use crate::models::InterfaceRecord;
use crate::types::ExportFormat;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Writes records as an indented JSON array with sorted keys.
///
/// Every object carries the table's column set; a column the record does not
/// have (an unset `mode`) is written as `null` so reading it back restores
/// the record unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter;

impl JsonWriter {
    /// Build the JSON document for a table
    pub fn to_value(&self, table: &RecordTable<'_>) -> Value {
        let objects = table
            .records()
            .iter()
            .map(|record| {
                // serde_json::Map is ordered by key, giving sorted output
                let object: Map<String, Value> = table
                    .columns()
                    .iter()
                    .map(|column| {
                        let value = record
                            .field(column)
                            .map_or(Value::Null, |v| Value::String(v.to_string()));
                        (column.to_string(), value)
                    })
                    .collect();
                Value::Object(object)
            })
            .collect();

        Value::Array(objects)
    }
}

impl FormatWriter for JsonWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write_table(&self, table: &RecordTable<'_>, out: &mut dyn Write) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
        self.to_value(table).serialize(&mut serializer)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Read records back from a JSON export
pub fn read_json_records(json: &str) -> Result<Vec<InterfaceRecord>> {
    Ok(serde_json::from_str(json)?)
}
