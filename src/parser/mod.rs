//! Flat `set` configuration parser
//!
//! Reconstructs interface, unit, VLAN and address structure from a Junos
//! configuration displayed as `set` statements. Lines are classified by
//! keyword, matched against [`LinePatterns`] and folded into a
//! [`ParserState`]; the finished state yields the ordered interface records.

mod patterns;
mod state;

pub use patterns::{
    is_unit_scoped, AddressMatch, DescriptionMatch, LineKind, LinePatterns, ModeMatch, VlanMatch,
    ADDRESS_KEYWORD, DESCRIPTION_KEYWORD, MODE_KEYWORDS, VLAN_KEYWORD,
};
pub use state::ParserState;

use crate::error::{AppError, Result};
use crate::models::InterfaceRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters collected while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines read
    pub total_lines: usize,
    /// Lines carrying a recognised keyword
    pub matched_lines: usize,
    /// 1-based numbers of keyword lines whose pattern did not match
    pub skipped_lines: Vec<usize>,
    /// Records produced
    pub records: usize,
}

/// Records and statistics of one parse
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<InterfaceRecord>,
    pub stats: ParseStats,
}

impl ParseOutcome {
    /// Whether no interface record was found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parser for Junos flat configuration
#[derive(Debug, Clone)]
pub struct JunosParser {
    patterns: LinePatterns,
}

impl JunosParser {
    /// Create a parser with compiled patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: LinePatterns::new()?,
        })
    }

    /// Compiled line patterns
    pub fn patterns(&self) -> &LinePatterns {
        &self.patterns
    }

    /// Parse a sequence of lines
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(ParserState::new(), |state, line| state.step(&self.patterns, line.as_ref()))
            .finish()
    }

    /// Parse configuration text held in memory
    pub fn parse_str(&self, text: &str) -> ParseOutcome {
        self.parse_lines(text.lines())
    }

    /// Parse configuration from a buffered reader
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParseOutcome> {
        let mut state = ParserState::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| AppError::io(format!("Failed to read configuration: {}", e)))?;
            if read == 0 {
                break;
            }
            state = state.step(&self.patterns, &String::from_utf8_lossy(&buf));
        }
        Ok(state.finish())
    }

    /// Parse a configuration file
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::file_not_found(path.display().to_string()),
            _ => AppError::io(format!("Failed to open {}: {}", path.display(), e)),
        })?;

        self.parse_reader(BufReader::new(file)).map_err(|e| match e {
            AppError::Io(msg) => AppError::io(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }
}

/// Parse configuration text into interface records
pub fn parse_config(text: &str) -> Result<Vec<InterfaceRecord>> {
    Ok(JunosParser::new()?.parse_str(text).records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;
    use std::io::Write as _;

    const UPLINK_EXAMPLE: &str = "\
set interfaces ge-0/0/1 description Uplink
set interfaces ge-0/0/1 unit 0 family ethernet-switching interface-mode trunk
set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members 100
set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members 200
";

    const SWITCH_CONFIG: &str = r#"set version 18.4R2.7
set system host-name qfx5100-01
set interfaces ge-0/0/0 description "Core uplink A"
set interfaces ge-0/0/0 unit 0 family ethernet-switching interface-mode trunk
set interfaces ge-0/0/0 unit 0 family ethernet-switching vlan members 10
set interfaces ge-0/0/0 unit 0 family ethernet-switching vlan members 20
set interfaces ge-0/0/0 unit 0 family ethernet-switching vlan members 30-35
set interfaces ge-0/0/1 description Printer
set interfaces ge-0/0/1 unit 0 family ethernet-switching interface-mode access
set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members 20
set interfaces ge-0/0/2 unit 0 family ethernet-switching vlan members 99
set interfaces irb unit 10 description Users
set interfaces irb unit 10 family inet address 10.10.0.1/24
set interfaces irb unit 20 description Printers
set interfaces irb unit 20 family inet address 10.20.0.1/24
set interfaces lo0 description Loopback
set interfaces lo0 unit 0 family inet address 192.0.2.1/32
set vlans users vlan-id 10
"#;

    #[test]
    fn test_uplink_example() {
        let records = parse_config(UPLINK_EXAMPLE).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.interface, "ge-0/0/1");
        assert_eq!(record.description, "Uplink");
        assert_eq!(record.unit, "0");
        assert_eq!(record.mode.as_deref(), Some("trunk"));
        assert_eq!(record.vlans, "100,200");
        assert_eq!(record.ip, "");
    }

    #[test]
    fn test_full_switch_config() {
        let parser = JunosParser::new().unwrap();
        let outcome = parser.parse_str(SWITCH_CONFIG);
        let records = &outcome.records;

        let names: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.interface.as_str(), r.unit.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("ge-0/0/0", "0"), ("ge-0/0/1", "0"), ("irb", "10"), ("irb", "20"), ("lo0", "0")]
        );

        assert_eq!(records[0].description, "Core uplink A");
        assert_eq!(records[0].vlans, "10,20,30-35");
        assert_eq!(records[1].mode.as_deref(), Some("access"));
        assert_eq!(records[1].vlans, "20");
        assert_eq!(records[2].ip, "10.10.0.1/24");
        assert_eq!(records[3].ip, "10.20.0.1/24");
        assert_eq!(records[3].mode, None);
        assert_eq!(records[4].ip, "192.0.2.1/32");

        assert_eq!(outcome.stats.total_lines, 18);
        assert_eq!(outcome.stats.records, 5);
        assert!(outcome.stats.skipped_lines.is_empty());
    }

    #[test]
    fn test_last_record_is_flushed() {
        let records = parse_config("set interfaces xe-0/0/9 description Last").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].interface, "xe-0/0/9");
    }

    #[test]
    fn test_mismatched_context_leaves_defaults() {
        let text = "\
set interfaces ge-0/0/1 description Uplink
set interfaces ge-0/0/2 unit 0 family ethernet-switching interface-mode trunk
set interfaces ge-0/0/2 unit 0 family ethernet-switching vlan members 100
set interfaces ge-0/0/1 unit 5 family inet address 10.0.0.1/24
";
        let records = parse_config(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mode, None);
        assert_eq!(records[0].vlans, "");
        assert_eq!(records[0].ip, "");
    }

    #[test]
    fn test_no_descriptions_yields_empty_outcome() {
        let parser = JunosParser::new().unwrap();
        let outcome = parser.parse_str("set system host-name sw1\nset vlans v10 vlan-id 10\n");
        assert!(outcome.is_empty());
        assert_eq!(outcome.stats.total_lines, 2);

        assert!(parser.parse_str("").is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "\
set interfaces ge-0/0/1 description Uplink
delete interfaces ge-0/0/7 description
set interfaces ge-0/0/1 unit 0 family ethernet-switching interface-mode
set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members 100
";
        let outcome = JunosParser::new().unwrap().parse_str(text);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].vlans, "100");
        assert_eq!(outcome.stats.skipped_lines, vec![2, 3]);
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let parser = JunosParser::new().unwrap();
        let from_reader = parser.parse_reader(Cursor::new(SWITCH_CONFIG)).unwrap();
        let from_str = parser.parse_str(SWITCH_CONFIG);
        assert_eq!(from_reader.records, from_str.records);
        assert_eq!(from_reader.stats, from_str.stats);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(UPLINK_EXAMPLE.as_bytes()).unwrap();

        let outcome = JunosParser::new().unwrap().parse_file(file.path()).unwrap();
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_parse_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.conf");
        let err = JunosParser::new().unwrap().parse_file(&missing).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
        assert!(err.to_string().contains("missing.conf"));
    }

    #[test]
    fn test_parse_file_with_latin1_description() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"set interfaces ge-0/0/1 description Uplink\n").unwrap();
        file.write_all(b"set interfaces ge-0/0/2 description B\xfcro\n").unwrap();
        file.write_all(b"set interfaces ge-0/0/3 description Server\n").unwrap();

        let outcome = JunosParser::new().unwrap().parse_file(file.path()).unwrap();
        let names: Vec<&str> = outcome.records.iter().map(|r| r.interface.as_str()).collect();
        assert_eq!(names, vec!["ge-0/0/1", "ge-0/0/2", "ge-0/0/3"]);
        assert_eq!(outcome.records[1].description, "B\u{FFFD}ro");
        assert_eq!(outcome.records[2].description, "Server");
        assert_eq!(outcome.stats.total_lines, 3);
    }

    #[test]
    fn test_parse_reader_without_trailing_newline() {
        let parser = JunosParser::new().unwrap();
        let outcome = parser
            .parse_reader(Cursor::new("set interfaces ge-0/0/1 description A\r\nset interfaces ge-0/0/2 description B"))
            .unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].description, "A");
        assert_eq!(outcome.records[1].description, "B");
    }

    #[test]
    fn test_unit_scoping_requires_irb_interface() {
        let records = parse_config(
            "set interfaces ge-0/0/1 description irb-gw\n\
             set interfaces ge-0/0/1 unit 0 family inet address 10.9.0.1/24\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].interface, "ge-0/0/1");
        assert_eq!(records[0].description, "irb-gw");
        assert_eq!(records[0].unit, "0");
        assert_eq!(records[0].ip, "10.9.0.1/24");
    }

    fn interface_name() -> impl Strategy<Value = String> {
        (0u8..4, 0u8..48).prop_map(|(fpc, port)| format!("ge-{}/0/{}", fpc, port))
    }

    proptest! {
        #[test]
        fn prop_vlans_keep_source_order(vlans in proptest::collection::vec(1u16..4095, 1..20)) {
            let mut text = String::from("set interfaces ge-0/0/1 description Trunk\n");
            for vlan in &vlans {
                text.push_str(&format!(
                    "set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members {}\n",
                    vlan
                ));
            }

            let records = parse_config(&text).unwrap();
            let expected: Vec<String> = vlans.iter().map(|v| v.to_string()).collect();
            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(records[0].vlans.clone(), expected.join(","));
        }

        #[test]
        fn prop_one_record_per_description_context(names in proptest::collection::vec(interface_name(), 1..30)) {
            let mut text = String::new();
            let mut expected = 0usize;
            let mut previous: Option<&String> = None;
            for name in &names {
                text.push_str(&format!("set interfaces {} description port\n", name));
                text.push_str(&format!(
                    "set interfaces {} unit 0 family ethernet-switching interface-mode access\n",
                    name
                ));
                if previous != Some(name) {
                    expected += 1;
                }
                previous = Some(name);
            }

            let records = parse_config(&text).unwrap();
            prop_assert_eq!(records.len(), expected);
            prop_assert!(records.iter().all(|r| r.mode.as_deref() == Some("access")));
        }
    }
}
