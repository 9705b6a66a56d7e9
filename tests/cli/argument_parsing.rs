//! CLI argument handling tests
//!
//! Runs the binary and checks the text output for each report.

use crate::common::{run, stderr, stdout};
use buildinfo::{build_info_string, build_properties, product_name, version_string};

#[test]
fn test_default_prints_build_info_line() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("buildinfo ({}) {}", product_name(), version_string(true))
    );
}

#[test]
fn test_program_name_override() {
    let output = run(&["--program", "myprog"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), build_info_string("myprog", false));
}

#[test]
fn test_verbose_lists_build_properties() {
    let output = run(&["-p", "myprog", "--verbose"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(build_info_string("myprog", false).as_str()));

    let mut rest: Vec<String> = lines.map(str::to_string).collect();
    let mut expected: Vec<String> = build_properties()
        .iter()
        .map(|(name, value)| format!("    {}: {}", name, value))
        .collect();
    rest.sort();
    expected.sort();
    assert_eq!(rest, expected);
}

#[test]
fn test_short_version() {
    let output = run(&["--short"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), version_string(false));
}

#[test]
fn test_key_lookup() {
    let output = run(&["--key", "rocksdb_build_date"]);
    assert!(output.status.success());
    assert_eq!(
        Some(stdout(&output).as_str()),
        build_properties().build_date()
    );
}

#[test]
fn test_unknown_key_fails() {
    let output = run(&["--key", "no_such_property"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Build property 'no_such_property' is not available"));
}

#[test]
fn test_unknown_key_reported_with_logging_off() {
    let output = run(&["--log-level", "off", "--key", "nope"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Build property 'nope' is not available"));
}

#[test]
fn test_color_flag_forces_ansi_log_output() {
    // stderr is a pipe here and NO_COLOR is set, so only the flag can enable color
    let output = run(&["--color", "--log-level", "debug"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("\x1b["));
}

#[test]
fn test_conflicting_flags_rejected() {
    let output = run(&["--short", "--verbose"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_log_level_rejected() {
    let output = run(&["--log-level", "loud"]);
    assert!(!output.status.success());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let output = run(&["--log-level", "debug", "--no-color"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), build_info_string("buildinfo", false));
    assert!(stderr(&output).contains("DBG"));
}

#[test]
fn test_log_file_receives_debug_output() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("buildinfo.log");
    let log_arg = log_path.to_string_lossy().to_string();

    let output = run(&["--log-level", "debug", "--log-file", &log_arg]);
    assert!(output.status.success());

    let log: String = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| std::fs::read_to_string(entry.unwrap().path()).ok())
        .collect();
    assert!(log.contains("resolved settings"));
}
