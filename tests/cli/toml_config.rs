//! TOML configuration tests
//!
//! Covers explicit and default config files, CLI precedence and error exits.

use crate::common::{run, run_in, stderr, stdout};
use buildinfo::{build_info_string, version_string};
use std::path::Path;

fn write_config(dir: &Path, contents: &str) -> String {
    let path = dir.join("custom.toml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_explicit_config_sets_program() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "program = \"db_bench\"\n");

    let output = run(&["--config-file", &config]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), build_info_string("db_bench", false));
}

#[test]
fn test_cli_program_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "program = \"db_bench\"\n");

    let output = run(&["-c", &config, "-p", "ldb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), build_info_string("ldb", false));
}

#[test]
fn test_config_verbose_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "verbose = true\noutput-format = \"json\"\nprogram = \"sst_dump\"\n",
    );

    let output = run(&["-c", &config]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["program"], "sst_dump");
    assert!(doc["properties"].is_object());
}

#[test]
#[cfg(unix)]
fn test_default_config_location_is_used() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = dirs_config_dir(home.path()).join("Buildinfo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("buildinfo.toml"), "program = \"from-default\"\n").unwrap();

    let output = run_in(home.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), build_info_string("from-default", false));
}

#[test]
fn test_short_flag_beats_config_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "verbose = true\n");

    let output = run(&["-c", &config, "--short"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), version_string(false));
}

#[test]
fn test_missing_explicit_config_fails() {
    let output = run(&["--config-file", "/definitely/not/here/buildinfo.toml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "colour = true\n");

    let output = run(&["-c", &config]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error parsing configuration file"));
}

#[test]
fn test_invalid_config_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "log-format = \"xml\"\n");

    let output = run(&["-c", &config]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid value for 'log-format'"));
}

// Where `dirs::config_dir()` resolves with HOME and XDG_CONFIG_HOME set to `home`
fn dirs_config_dir(home: &Path) -> std::path::PathBuf {
    if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support")
    } else {
        home.to_path_buf()
    }
}
