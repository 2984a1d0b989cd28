//! Interface record data model

use serde::{Deserialize, Serialize};

/// Column keys in canonical order
pub const FIELD_KEYS: [&str; 6] = ["interface", "description", "vlans", "unit", "ip", "mode"];

/// One interface (or IRB unit) reconstructed from the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Interface name, e.g. `ge-0/0/1` or `irb`
    pub interface: String,

    /// Interface description
    pub description: String,

    /// VLAN members, comma-joined in the order they were configured
    #[serde(default)]
    pub vlans: String,

    /// Logical unit number
    #[serde(default = "default_unit")]
    pub unit: String,

    /// IPv4 address with prefix length
    #[serde(default)]
    pub ip: String,

    /// Switch-port mode (`access`/`trunk`), only when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl InterfaceRecord {
    /// Create a record for a freshly matched description line
    pub fn new(interface: impl Into<String>, description: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            description: description.into(),
            vlans: String::new(),
            unit: unit.into(),
            ip: String::new(),
            mode: None,
        }
    }

    /// Append a VLAN member, keeping first-seen order
    pub fn push_vlan(&mut self, vlan: &str) {
        if !self.vlans.is_empty() {
            self.vlans.push(',');
        }
        self.vlans.push_str(vlan);
    }

    /// VLAN members as a list
    pub fn vlan_list(&self) -> Vec<&str> {
        if self.vlans.is_empty() {
            Vec::new()
        } else {
            self.vlans.split(',').collect()
        }
    }

    /// Keys present on this record, in canonical order
    pub fn keys(&self) -> Vec<&'static str> {
        FIELD_KEYS
            .iter()
            .copied()
            .filter(|key| *key != "mode" || self.mode.is_some())
            .collect()
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "interface" => Some(&self.interface),
            "description" => Some(&self.description),
            "vlans" => Some(&self.vlans),
            "unit" => Some(&self.unit),
            "ip" => Some(&self.ip),
            "mode" => self.mode.as_deref(),
            _ => None,
        }
    }
}

fn default_unit() -> String {
    crate::defaults::DEFAULT_UNIT.to_string()
}
