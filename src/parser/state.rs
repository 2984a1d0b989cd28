//! Parser state threaded through the line fold

use super::patterns::{is_unit_scoped, LineKind, LinePatterns};
use super::{ParseOutcome, ParseStats};
use crate::defaults::DEFAULT_UNIT;
use crate::models::InterfaceRecord;

/// Context carried from one line to the next.
///
/// The state is consumed and returned by [`ParserState::step`], so a parse is
/// a plain fold over the input lines. [`ParserState::finish`] must run after
/// the last line; it flushes the pending record.
#[derive(Debug, Clone)]
pub struct ParserState {
    current_interface: String,
    current_unit: String,
    current: Option<InterfaceRecord>,
    records: Vec<InterfaceRecord>,
    stats: ParseStats,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            current_interface: String::new(),
            current_unit: DEFAULT_UNIT.to_string(),
            current: None,
            records: Vec::new(),
            stats: ParseStats::default(),
        }
    }
}

impl ParserState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Interface of the record being built (empty before the first description)
    pub fn current_interface(&self) -> &str {
        &self.current_interface
    }

    /// Unit of the current context
    pub fn current_unit(&self) -> &str {
        &self.current_unit
    }

    /// Record being built, not yet emitted
    pub fn current(&self) -> Option<&InterfaceRecord> {
        self.current.as_ref()
    }

    /// Records already emitted
    pub fn records(&self) -> &[InterfaceRecord] {
        &self.records
    }

    /// Consume one line and return the updated state
    pub fn step(mut self, patterns: &LinePatterns, line: &str) -> Self {
        self.stats.total_lines += 1;
        let line = line.trim_end_matches(['\r', '\n']);

        let Some(kind) = LineKind::classify(line) else {
            return self;
        };
        self.stats.matched_lines += 1;

        let recognised = match kind {
            LineKind::Description => self.apply_description(patterns, line),
            LineKind::Mode => self.apply_mode(patterns, line),
            LineKind::VlanMembers => self.apply_vlan_members(patterns, line),
            LineKind::Address => self.apply_address(patterns, line),
        };

        if !recognised {
            self.stats.skipped_lines.push(self.stats.total_lines);
        }

        self
    }

    /// Flush the pending record and return everything parsed
    pub fn finish(mut self) -> ParseOutcome {
        self.flush();
        self.stats.records = self.records.len();
        ParseOutcome {
            records: self.records,
            stats: self.stats,
        }
    }

    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }

    fn apply_description(&mut self, patterns: &LinePatterns, line: &str) -> bool {
        let Some(generic) = patterns.match_description(line) else {
            return false;
        };

        let matched = if is_unit_scoped(generic.interface) {
            match patterns.match_unit_description(line) {
                Some(unit_match) => unit_match,
                None => return false,
            }
        } else {
            generic
        };

        self.current_unit = matched.unit.unwrap_or(DEFAULT_UNIT).to_string();

        if matched.interface != self.current_interface || self.current_unit != DEFAULT_UNIT {
            self.flush();
            self.current_interface = matched.interface.to_string();
            self.current = Some(InterfaceRecord::new(
                matched.interface,
                matched.description,
                self.current_unit.as_str(),
            ));
        }

        true
    }

    fn apply_mode(&mut self, patterns: &LinePatterns, line: &str) -> bool {
        let Some(matched) = patterns.match_mode(line) else {
            return false;
        };

        if matched.interface == self.current_interface {
            if let Some(record) = self.current.as_mut() {
                record.mode = Some(matched.mode.to_string());
            }
        }

        true
    }

    fn apply_vlan_members(&mut self, patterns: &LinePatterns, line: &str) -> bool {
        let Some(matched) = patterns.match_vlan_members(line) else {
            return false;
        };

        if matched.interface == self.current_interface {
            if let Some(record) = self.current.as_mut() {
                for member in matched.members {
                    record.push_vlan(member);
                }
            }
        }

        true
    }

    fn apply_address(&mut self, patterns: &LinePatterns, line: &str) -> bool {
        let Some(matched) = patterns.match_address(line) else {
            return false;
        };

        if matched.interface == self.current_interface && matched.unit == self.current_unit {
            if let Some(record) = self.current.as_mut() {
                record.ip = matched.ip.to_string();
            }
        }

        true
    }
}
