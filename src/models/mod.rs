//! Data models and structures for the configuration converter

pub mod config;
pub mod interface;

// Re-export main model types
pub use config::Config;
pub use interface::{InterfaceRecord, FIELD_KEYS};
