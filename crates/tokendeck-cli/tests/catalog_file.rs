//! Catalog File Loading Tests
//!
//! Verifies the --catalog flag against JSON data files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn tokendeck() -> Command {
    Command::cargo_bin("tokendeck").expect("binary builds")
}

fn write_catalog(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, content).expect("write catalog file");
    path
}

#[test]
fn test_catalog_flag_loads_json_file() {
    // Given: a two-token catalog file
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_catalog(
        &dir,
        r##"[
            {"rank":1,"name":"Alpha","symbol":"ALPHA","price":2.5,"change24h":1.0,"marketCap":1000000.0,"volume24h":50000.0,"logo":"A","color":"#111111"},
            {"rank":2,"name":"Beta","symbol":"BETA","price":0.5,"change24h":-2.0,"marketCap":500000.0,"volume24h":25000.0,"logo":"B","color":"#222222"}
        ]"##,
    );

    // When: listing with --catalog
    let output = tokendeck()
        .args(["--catalog", path.to_str().expect("utf-8 path")])
        .args(["list", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    // Then: the file's tokens replace the builtin catalog
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let tokens = json["content"]["tokens"].as_array().expect("tokens array");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0]["symbol"], "ALPHA");
    assert_eq!(tokens[1]["symbol"], "BETA");
    assert_eq!(json["content"]["total_count"], 2);
}

#[test]
fn test_catalog_file_drives_stats() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_catalog(
        &dir,
        r##"[
            {"rank":1,"name":"Alpha","symbol":"ALPHA","price":2.5,"change24h":1.0,"marketCap":1000000.0,"volume24h":50000.0,"logo":"A","color":"#111111"},
            {"rank":2,"name":"Beta","symbol":"BETA","price":0.5,"change24h":-2.0,"marketCap":500000.0,"volume24h":25000.0,"logo":"B","color":"#222222"}
        ]"##,
    );

    let output = tokendeck()
        .args(["--catalog", path.to_str().expect("utf-8 path")])
        .args(["stats", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["content"]["active_count"], 2);
    let total = json["content"]["total_market_cap"].as_f64().expect("number");
    assert!((total - 1_500_000.0).abs() < 0.01);
    let avg = json["content"]["avg_change_24h"].as_f64().expect("number");
    assert!((avg - (-0.5)).abs() < 1e-9);
}

#[test]
fn test_catalog_with_duplicate_symbol_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_catalog(
        &dir,
        r##"[
            {"rank":1,"name":"Alpha","symbol":"ALPHA","price":2.5,"change24h":1.0,"marketCap":1000000.0,"volume24h":50000.0,"logo":"A","color":"#111111"},
            {"rank":2,"name":"Alpha Two","symbol":"alpha","price":0.5,"change24h":-2.0,"marketCap":500000.0,"volume24h":25000.0,"logo":"a","color":"#222222"}
        ]"##,
    );

    tokendeck()
        .args(["--catalog", path.to_str().expect("utf-8 path")])
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn test_missing_catalog_file_reports_error() {
    tokendeck()
        .args(["--catalog", "/nonexistent/catalog.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}
