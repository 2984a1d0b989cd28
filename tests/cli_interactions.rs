//! CLI options interaction tests
//!
//! These tests validate that CLI options work correctly in combination with
//! each other and that failures map to the documented exit codes.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE: &str = "\
set interfaces ge-0/0/1 description Uplink
set interfaces ge-0/0/1 unit 0 family ethernet-switching interface-mode trunk
set interfaces ge-0/0/1 unit 0 family ethernet-switching vlan members 100
";

/// Helper function to create a test command isolated from the caller's environment
fn create_test_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qfx-convert").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("QFX_OUTPUT_DIR")
        .env_remove("QFX_FORMATS")
        .env_remove("QFX_ENABLE_COLOR")
        .env_remove("QFX_LOG_FORMAT")
        .arg("--no-color");
    cmd
}

/// Helper function to write an input configuration file
fn create_input(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("switch.conf");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_missing_file_argument() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_nonexistent_input_file() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("--file")
        .arg("does-not-exist.conf")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("does-not-exist.conf"));
}

#[test]
fn test_config_without_interfaces() {
    let (dir, input) = create_input("set system host-name sw1\nset vlans v100 vlan-id 100\n");
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Nothing to export"));

    assert!(!dir.path().join("switch_convert_to_.txt").exists());
}

#[test]
fn test_default_writes_all_formats_next_to_input() {
    let (dir, input) = create_input(SAMPLE);
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 interface record(s) into 5 file(s)"));

    for ext in ["txt", "html", "json", "csv", "xlsx"] {
        let path = dir.path().join(format!("switch_convert_to_.{}", ext));
        assert!(path.exists(), "missing {}", path.display());
    }
}

#[test]
fn test_formats_subset() {
    let (dir, input) = create_input(SAMPLE);
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("--formats")
        .arg("json,csv")
        .assert()
        .success();

    assert!(dir.path().join("switch_convert_to_.json").exists());
    assert!(dir.path().join("switch_convert_to_.csv").exists());
    assert!(!dir.path().join("switch_convert_to_.txt").exists());
    assert!(!dir.path().join("switch_convert_to_.xlsx").exists());
}

#[test]
fn test_invalid_formats() {
    let (dir, input) = create_input(SAMPLE);
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("--formats")
        .arg("yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_output_dir_option() {
    let (dir, input) = create_input(SAMPLE);
    let out = dir.path().join("reports");

    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--formats")
        .arg("txt")
        .assert()
        .success();

    assert!(out.join("switch_convert_to_.txt").exists());
    assert!(!dir.path().join("switch_convert_to_.txt").exists());
}

#[test]
fn test_environment_formats_and_cli_override() {
    let (dir, input) = create_input(SAMPLE);

    create_test_cmd(&dir)
        .env("QFX_FORMATS", "html")
        .arg("-f")
        .arg(&input)
        .assert()
        .success();
    assert!(dir.path().join("switch_convert_to_.html").exists());
    assert!(!dir.path().join("switch_convert_to_.json").exists());

    create_test_cmd(&dir)
        .env("QFX_FORMATS", "html")
        .arg("-f")
        .arg(&input)
        .arg("--formats")
        .arg("json")
        .assert()
        .success();
    assert!(dir.path().join("switch_convert_to_.json").exists());
}

#[test]
fn test_dotenv_file_in_working_directory() {
    let (dir, input) = create_input(SAMPLE);
    fs::write(dir.path().join(".env"), "QFX_FORMATS=csv\n").unwrap();

    create_test_cmd(&dir).arg("-f").arg(&input).assert().success();

    assert!(dir.path().join("switch_convert_to_.csv").exists());
    assert!(!dir.path().join("switch_convert_to_.txt").exists());
}

#[test]
fn test_dotenv_entries_are_checked() {
    let (dir, input) = create_input(SAMPLE);
    fs::write(dir.path().join(".env"), "QFX_OUTPUT_DIR=\nQFX_FORMATS=json\n").unwrap();

    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid .env entry"))
        .stderr(predicate::str::contains("QFX_OUTPUT_DIR cannot be empty"));

    assert!(dir.path().join("switch_convert_to_.json").exists());
}

#[test]
fn test_piped_output_has_no_color_codes() {
    let (dir, input) = create_input(SAMPLE);
    Command::cargo_bin("qfx-convert")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("FORCE_COLOR")
        .env_remove("QFX_ENABLE_COLOR")
        .env_remove("QFX_FORMATS")
        .arg("-f")
        .arg(&input)
        .arg("--formats")
        .arg("txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 interface record(s)"))
        .stdout(predicate::str::contains("\x1b[").not());

    Command::cargo_bin("qfx-convert")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("FORCE_COLOR")
        .arg("-f")
        .arg("missing.conf")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_conflicting_color_flags() {
    let (dir, input) = create_input(SAMPLE);
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("--color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--color and --no-color"));
}

#[test]
fn test_verbose_reports_statistics() {
    let (dir, input) = create_input(SAMPLE);
    create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("--verbose")
        .arg("--formats")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse Summary"))
        .stdout(predicate::str::contains("Lines read:       3"))
        .stdout(predicate::str::contains("switch_convert_to_.json"));
}

#[test]
fn test_debug_emits_json_logs() {
    let (dir, input) = create_input(SAMPLE);
    let output = create_test_cmd(&dir)
        .arg("-f")
        .arg(&input)
        .arg("--debug")
        .arg("--formats")
        .arg("txt")
        .output()
        .unwrap();

    assert!(output.status.success());
    let logs = String::from_utf8(output.stdout).unwrap() + &String::from_utf8(output.stderr).unwrap();
    let parsed = logs
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();

    assert!(!parsed.is_empty());
    assert!(parsed.iter().any(|entry| entry["message"]
        .as_str()
        .map_or(false, |m| m.starts_with("Parsed 1 interface records"))));
}

#[test]
fn test_help_topics() {
    let dir = TempDir::new().unwrap();
    for (topic, expected) in [
        ("formats", "OUTPUT FORMATS"),
        ("input", "display set"),
        ("examples", "EXAMPLES:"),
        ("config", "QFX_FORMATS"),
    ] {
        create_test_cmd(&dir)
            .arg("--help-topic")
            .arg(topic)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}
