#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

pub fn object_fixture() -> Value {
    serde_json::from_str(&fixture_text("object.json")).expect("object.json must parse")
}

/// Compact text of the fixture, as the `*_as_text` functions print it.
pub fn object_fixture_compact() -> String {
    serde_json::to_string(&object_fixture()).expect("fixture must serialize")
}
