//! JSON output tests

use crate::common::{run, stdout};
use buildinfo::{build_properties, product_name, version_string};
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let mut full = vec!["--output-format", "json"];
    full.extend_from_slice(args);
    let output = run(&full);
    assert!(output.status.success());
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn test_json_build_info() {
    let doc = run_json(&["--program", "ldb"]);
    assert_eq!(doc["program"], "ldb");
    assert_eq!(doc["product"], product_name());
    assert_eq!(doc["version"], version_string(true));
    assert!(doc.get("properties").is_none());
}

#[test]
fn test_json_verbose_properties_match_registry() {
    let doc = run_json(&["--verbose"]);
    let props = doc["properties"].as_object().unwrap();

    assert_eq!(props.len(), build_properties().len());
    for (name, value) in build_properties() {
        assert_eq!(props[name.as_str()], value.as_str());
    }
}

#[test]
fn test_json_short_version() {
    let doc = run_json(&["--short"]);
    assert_eq!(doc["version"], version_string(false));
}

#[test]
fn test_json_key_lookup() {
    let doc = run_json(&["--key", "rocksdb_build_date"]);
    assert_eq!(doc["name"], "rocksdb_build_date");
    assert_eq!(
        doc["value"].as_str(),
        build_properties().build_date()
    );
}
