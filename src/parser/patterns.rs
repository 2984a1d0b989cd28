//! Line classification and regex patterns for flat `set interfaces` statements

use crate::error::Result;
use regex::{Captures, Regex};

/// Substring that marks a description line
pub const DESCRIPTION_KEYWORD: &str = "description";
/// Substrings that mark a switch-port mode line
pub const MODE_KEYWORDS: [&str; 2] = [
    "ethernet-switching interface-mode",
    "ethernet-switching port-mode",
];
/// Substring that marks a VLAN membership line
pub const VLAN_KEYWORD: &str = "ethernet-switching vlan members";
/// Substring that marks an IPv4 address line
pub const ADDRESS_KEYWORD: &str = "family inet address";

/// Interfaces whose descriptions live on a logical unit
const UNIT_SCOPED_INTERFACES: [&str; 1] = ["irb"];

const DESCRIPTION_VALUE: &str = r#"description +(?:"(?P<quoted>[^"]*)"|(?P<description>\S+))"#;

/// Kind of statement a line carries, decided by keyword before any regex runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Description,
    Mode,
    VlanMembers,
    Address,
}

impl LineKind {
    /// Classify a line; the first matching keyword wins
    pub fn classify(line: &str) -> Option<LineKind> {
        if line.contains(DESCRIPTION_KEYWORD) {
            Some(LineKind::Description)
        } else if MODE_KEYWORDS.iter().any(|k| line.contains(k)) {
            Some(LineKind::Mode)
        } else if line.contains(VLAN_KEYWORD) {
            Some(LineKind::VlanMembers)
        } else if line.contains(ADDRESS_KEYWORD) {
            Some(LineKind::Address)
        } else {
            None
        }
    }
}

/// Whether descriptions for this interface are scoped to a unit
pub fn is_unit_scoped(interface: &str) -> bool {
    UNIT_SCOPED_INTERFACES.contains(&interface)
}

/// Captures of a description line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMatch<'l> {
    pub interface: &'l str,
    pub unit: Option<&'l str>,
    pub description: &'l str,
}

/// Captures of a switch-port mode line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMatch<'l> {
    pub interface: &'l str,
    pub mode: &'l str,
}

/// Captures of a VLAN membership line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanMatch<'l> {
    pub interface: &'l str,
    pub members: Vec<&'l str>,
}

/// Captures of an address line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMatch<'l> {
    pub interface: &'l str,
    pub unit: &'l str,
    pub ip: &'l str,
}

/// Compiled patterns for every statement the parser understands
#[derive(Debug, Clone)]
pub struct LinePatterns {
    description: Regex,
    unit_description: Regex,
    mode: Regex,
    vlan_members: Regex,
    address: Regex,
}

impl LinePatterns {
    /// Compile all patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            description: Regex::new(&format!(
                r"^set interfaces +(?P<interface>\S+).*?{}",
                DESCRIPTION_VALUE
            ))?,
            unit_description: Regex::new(&format!(
                r"^set interfaces +(?P<interface>\S+) +unit (?P<unit>\d+).*?{}",
                DESCRIPTION_VALUE
            ))?,
            mode: Regex::new(
                r"^set interfaces +(?P<interface>\S+).+ethernet-switching +(?:interface-mode|port-mode) +(?P<mode>\S+)",
            )?,
            vlan_members: Regex::new(
                r"^set interfaces +(?P<interface>\S+).+ethernet-switching +vlan +members +(?P<vlan>\S.*?)\s*$",
            )?,
            address: Regex::new(
                r"^set interfaces +(?P<interface>\S+) +unit (?P<unit>\d+).*address +(?P<ip>[\d.]+/\d+)",
            )?,
        })
    }

    /// Match the interface-level description pattern
    pub fn match_description<'l>(&self, line: &'l str) -> Option<DescriptionMatch<'l>> {
        let caps = self.description.captures(line)?;
        Some(DescriptionMatch {
            interface: caps.name("interface")?.as_str(),
            unit: None,
            description: description_text(&caps)?,
        })
    }

    /// Match the unit-aware description pattern used for IRB units
    pub fn match_unit_description<'l>(&self, line: &'l str) -> Option<DescriptionMatch<'l>> {
        let caps = self.unit_description.captures(line)?;
        Some(DescriptionMatch {
            interface: caps.name("interface")?.as_str(),
            unit: Some(caps.name("unit")?.as_str()),
            description: description_text(&caps)?,
        })
    }

    /// Match a switch-port mode statement
    pub fn match_mode<'l>(&self, line: &'l str) -> Option<ModeMatch<'l>> {
        let caps = self.mode.captures(line)?;
        Some(ModeMatch {
            interface: caps.name("interface")?.as_str(),
            mode: caps.name("mode")?.as_str(),
        })
    }

    /// Match a VLAN membership statement
    pub fn match_vlan_members<'l>(&self, line: &'l str) -> Option<VlanMatch<'l>> {
        let caps = self.vlan_members.captures(line)?;
        let raw = caps.name("vlan")?.as_str();
        let members = split_members(raw);
        if members.is_empty() {
            return None;
        }
        Some(VlanMatch {
            interface: caps.name("interface")?.as_str(),
            members,
        })
    }

    /// Match an IPv4 address statement
    pub fn match_address<'l>(&self, line: &'l str) -> Option<AddressMatch<'l>> {
        let caps = self.address.captures(line)?;
        Some(AddressMatch {
            interface: caps.name("interface")?.as_str(),
            unit: caps.name("unit")?.as_str(),
            ip: caps.name("ip")?.as_str(),
        })
    }
}

fn description_text<'l>(caps: &Captures<'l>) -> Option<&'l str> {
    caps.name("quoted")
        .or_else(|| caps.name("description"))
        .map(|m| m.as_str())
}

/// Split `100`, `100-110` or `[ 100 200 ]` into individual members
fn split_members(raw: &str) -> Vec<&str> {
    let raw = raw.trim();
    match raw.strip_prefix('[') {
        Some(inner) => inner
            .trim_end_matches(']')
            .split_whitespace()
            .collect(),
        None => vec![raw],
    }
}
