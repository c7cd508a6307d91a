use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn jataka() -> Command {
    Command::cargo_bin("jataka").unwrap()
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../jataka_chart/tests/fixtures/chennai.json")
}

const BIRTH: [&str; 14] = [
    "--year", "2025", "--month", "12", "--day", "13", "--hour", "22", "--minute", "8", "--lat",
    "13.0827", "--lon", "80.2707",
];

#[test]
fn dms_reference_format() {
    jataka()
        .args(["dms", "10.5"])
        .assert()
        .success()
        .stdout("10° 30' 0\"\n");
}

#[test]
fn dms_negative_angle() {
    jataka()
        .args(["dms", "-1.5"])
        .assert()
        .success()
        .stdout("-1° 30' 0\"\n");
}

#[test]
fn dms_carry_from_config() {
    let mut cfg = tempfile::NamedTempFile::new().unwrap();
    writeln!(cfg, "[format]\ncarry_seconds = true").unwrap();

    jataka()
        .args(["dms", "5.99999989"])
        .assert()
        .success()
        .stdout("5° 59' 60\"\n");
    jataka()
        .arg("--config")
        .arg(cfg.path())
        .args(["dms", "5.99999989"])
        .assert()
        .success()
        .stdout("6° 0' 0\"\n");
}

#[test]
fn bad_config_fails() {
    let mut cfg = tempfile::NamedTempFile::new().unwrap();
    writeln!(cfg, "[format]\nunknown = 1").unwrap();
    jataka()
        .arg("--config")
        .arg(cfg.path())
        .args(["dms", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn rashi_lookup() {
    jataka()
        .args(["rashi", "130"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simha (Leo, சிம்மம்)"))
        .stdout(predicate::str::contains("10° 0' 0\""));
}

#[test]
fn nakshatra_lookup() {
    jataka()
        .args(["nakshatra", "165.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hasta (index 12) - Pada 2"))
        .stdout(predicate::str::contains("lord Moon"));
}

#[test]
fn panchang_scenario() {
    jataka()
        .args(["panchang", "--sun", "30", "--moon", "45", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shukla Paksha Dwitiya"))
        .stdout(predicate::str::contains("Balava"))
        .stdout(predicate::str::contains("Monday"));
}

#[test]
fn panchang_rejects_bad_date() {
    jataka()
        .args(["panchang", "--sun", "30", "--moon", "45", "--date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn panchang_rejects_unreduced_moon() {
    jataka()
        .args(["panchang", "--sun", "30", "--moon", "400", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Moon longitude 400 is not reduced"));
}

#[test]
fn dasha_listing() {
    jataka()
        .args(["dasha", "--moon", "15", "--birth", "2000-01-01T12:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Venus in Bharani"))
        .stdout(predicate::str::contains("Sun"));
}

#[test]
fn dasha_json() {
    let out = jataka()
        .args(["dasha", "--moon", "15", "--birth", "2000-01-01T12:00:00Z", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["currentLord"], "Venus");
    assert_eq!(v["sequence"].as_array().unwrap().len(), 9);
}

#[test]
fn dasha_rejects_unreduced_moon() {
    jataka()
        .args(["dasha", "--moon", "360", "--birth", "2000-01-01T12:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not reduced"));
}

#[test]
fn chart_from_fixture() {
    let out = jataka()
        .arg("chart")
        .arg("--fixture")
        .arg(fixture())
        .args(BIRTH)
        .args(["--tz", "5.5"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["success"], true);
    assert_eq!(v["data"]["lagna"]["english"], "Leo");
    assert_eq!(v["data"]["panchangam"]["vara"], "Saturday");
}

#[test]
fn chart_missing_timezone_is_client_error() {
    jataka()
        .arg("chart")
        .arg("--fixture")
        .arg(fixture())
        .args(BIRTH)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid input"))
        .stdout(predicate::str::contains("missing: timezone"));
}
