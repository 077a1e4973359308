use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn data(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data").join(path)
}

fn truesize() -> Command {
    Command::cargo_bin("truesize").expect("binary built")
}

#[test]
fn mercator_prints_ratio() {
    truesize()
        .args(["mercator", "--from-lat", "0", "--to-lat", "60"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2.0000"));

    truesize()
        .args(["mercator", "--from-lat", "-60", "--to-lat", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.5000"));
}

#[test]
fn drag_writes_geojson_to_stdout() {
    let output = truesize()
        .arg("drag")
        .arg("--input")
        .arg(data("sample/countries.geojson"))
        .args(["--feature", "SQR", "--to", "-30,45"])
        .output()
        .expect("run truesize");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: Value = serde_json::from_slice(&output.stdout).expect("geojson on stdout");
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["features"][0]["id"], "SQR");
    let ring = &value["features"][0]["geometry"]["coordinates"][0];
    assert_eq!(ring.as_array().map(Vec::len), Some(5));
}

#[test]
fn planet_writes_file_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("moon.geojson");
    let csv = dir.path().join("moon.csv");
    truesize()
        .arg("planet")
        .arg("--input")
        .arg(data("sample/countries.geojson"))
        .args(["--feature", "GRL", "--body", "moon", "--to", "0,0"])
        .arg("--bodies")
        .arg(data("bodies.yaml"))
        .arg("--output")
        .arg(&out)
        .arg("--summary")
        .arg(&csv)
        .assert()
        .success();

    let geojson = std::fs::read_to_string(&out).expect("geojson written");
    assert!(geojson.contains("\"GRL\""));
    let summary = std::fs::read_to_string(&csv).expect("summary written");
    assert!(summary.lines().nth(1).is_some_and(|row| row.contains(",Moon,")));
}

#[test]
fn unknown_body_and_feature_fail() {
    truesize()
        .arg("planet")
        .arg("--input")
        .arg(data("sample/countries.geojson"))
        .args(["--feature", "GRL", "--body", "Vulcan", "--to", "0,0"])
        .arg("--bodies")
        .arg(data("bodies.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan"));

    truesize()
        .arg("drag")
        .arg("--input")
        .arg(data("sample/countries.geojson"))
        .args(["--feature", "ATL", "--to", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ATL"));
}

#[test]
fn bodies_lists_catalog() {
    truesize()
        .arg("bodies")
        .arg("--bodies")
        .arg(data("bodies.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Jupiter").and(predicate::str::contains("Ceres")));
}

#[test]
fn version_flag_reports_package_version() {
    truesize()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
