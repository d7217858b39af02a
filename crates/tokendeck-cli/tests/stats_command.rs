//! Aggregate Statistics Tests

use assert_cmd::Command;
use predicates::prelude::*;

fn tokendeck() -> Command {
    Command::cargo_bin("tokendeck").expect("binary builds")
}

#[test]
fn test_stats_cover_the_full_catalog() {
    let output = tokendeck()
        .args(["stats", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let content = &json["content"];

    assert_eq!(content["active_count"], 12);

    let total_market_cap = content["total_market_cap"].as_f64().expect("number");
    assert!((total_market_cap - 420_986_000_000.0).abs() < 1.0);

    let total_volume = content["total_volume"].as_f64().expect("number");
    assert!((total_volume - 18_461_500_000.0).abs() < 1.0);

    let avg_change = content["avg_change_24h"].as_f64().expect("number");
    assert!((avg_change - 4.5808).abs() < 0.001);
}

#[test]
fn test_stats_plain_output_formats_values() {
    tokendeck()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Market Cap"))
        .stdout(predicate::str::contains("$420.99B"))
        .stdout(predicate::str::contains("$18.46B"))
        .stdout(predicate::str::contains("+4.58%"));
}
