//! QFX Convert
//!
//! Converts flat Juniper `set` style switch configurations into a per
//! interface summary and exports it as a text grid, HTML, JSON, CSV and XLSX.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use export::{ExportReport, Exporter, FormatWriter, RecordTable, WriterRegistry};
pub use models::{Config, InterfaceRecord};
pub use output::{ColoredFormatter, OutputFormatterFactory, PlainFormatter, ReportFormatter};
pub use parser::{parse_config, JunosParser, ParseOutcome, ParseStats};
pub use types::ExportFormat;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Default configuration values
pub mod defaults {
    use crate::types::ExportFormat;

    /// Unit assigned to records of non-IRB interfaces
    pub const DEFAULT_UNIT: &str = "0";
    /// Appended to the input stem to form output file names
    pub const OUTPUT_SUFFIX: &str = "_convert_to_";
    pub const CSV_DELIMITER: u8 = b';';
    pub const DEFAULT_FORMATS: [ExportFormat; 5] = ExportFormat::ALL;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
