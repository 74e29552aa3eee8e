use predicates::prelude::*;
use serde_json::{json, Value};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_metadata(dir: &TempDir, relative: &str, doc: &Value) -> PathBuf {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    path
}

fn read_metadata(path: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn set_updates_existing_leaf() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = write_metadata(
        &dir,
        "cgw-01/metadata.json",
        &json!({"system": {"location": {"floor": "1"}}}),
    );

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "set",
            "floor",
            "3",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated existing: floor -> 3"));

    assert_eq!(
        read_metadata(&path),
        json!({"system": {"location": {"floor": "3"}}})
    );
    Ok(())
}

#[test]
fn set_blank_value_removes_key() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = write_metadata(&dir, "cgw-01/metadata.json", &json!({"Units": "C", "x": 1}));

    assert_cmd::Command::cargo_bin("metafix")?
        .args(["set", "units", "", "--root", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: .Units"));

    assert_eq!(read_metadata(&path), json!({"x": 1}));
    Ok(())
}

#[test]
fn set_dry_run_writes_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = write_metadata(&dir, "cgw-01/metadata.json", &json!({"floor": "1"}));

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "set",
            "floor",
            "9",
            "--dry-run",
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(read_metadata(&path), json!({"floor": "1"}));
    Ok(())
}

#[test]
fn apply_runs_device_batches() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let touched = write_metadata(
        &dir,
        "cgw-01/metadata.json",
        &json!({"system": {"location": {"floor": "1"}}}),
    );
    let untouched = write_metadata(&dir, "cgw-02/metadata.json", &json!({"floor": "1"}));

    let rules = dir.path().join("devices.json");
    fs::write(
        &rules,
        r#"{"cgw-01": {"system.location.panel": "Panel A / 2"}}"#,
    )?;

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "apply",
            rules.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files examined, 1 written"));

    assert_eq!(
        read_metadata(&touched),
        json!({"system": {"location": {"floor": "1", "panel": "PanelA-2"}}})
    );
    assert_eq!(read_metadata(&untouched), json!({"floor": "1"}));
    Ok(())
}

#[test]
fn apply_report_flag_writes_report_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    write_metadata(&dir, "cgw-01/metadata.json", &json!({"floor": "1"}));

    let rules = dir.path().join("devices.json");
    fs::write(&rules, r#"{"cgw-01": {"floor": "2"}}"#)?;
    let report = dir.path().join("report.txt");

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "apply",
            rules.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let text = fs::read_to_string(&report)?;
    assert!(text.contains("Updated existing: floor -> 2"));
    Ok(())
}

#[test]
fn apply_mentions_devices_with_no_files() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let rules = dir.path().join("devices.json");
    fs::write(&rules, r#"{"ghost-device": {"floor": "2"}}"#)?;

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "apply",
            rules.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No metadata.json found for device ghost-device",
        ));
    Ok(())
}

#[test]
fn check_json_output_parses() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    write_metadata(&dir, "cgw-01/metadata.json", &json!({"floor": "1"}));
    write_metadata(&dir, "cgw-02/metadata.json", &json!({"floor": "2"}));

    let rules = dir.path().join("keyword.json");
    fs::write(&rules, r#"{"floor": "1", "ghost": "x"}"#)?;

    let output = assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "check",
            rules.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["files_checked"], 2);
    let results = value["results"].as_array().unwrap();
    let floor = results.iter().find(|r| r["keyword"] == "floor").unwrap();
    assert_eq!(floor["pass"], 1);
    assert_eq!(floor["fail"], 1);
    let ghost = results.iter().find(|r| r["keyword"] == "ghost").unwrap();
    assert_eq!(ghost["skipped"], 2);
    Ok(())
}

#[test]
fn check_never_mutates_files() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = write_metadata(&dir, "cgw-01/metadata.json", &json!({"floor": "1"}));
    let rules = dir.path().join("keyword.json");
    fs::write(&rules, r#"{"floor": "9"}"#)?;

    assert_cmd::Command::cargo_bin("metafix")?
        .args([
            "check",
            rules.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(read_metadata(&path), json!({"floor": "1"}));
    Ok(())
}

#[test]
fn missing_root_directory_fails() -> Result<(), Box<dyn Error>> {
    assert_cmd::Command::cargo_bin("metafix")?
        .args(["set", "floor", "1", "--root", "/nonexistent/metafix-root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory not found"));
    Ok(())
}

#[test]
fn malformed_file_does_not_abort_other_files() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let bad = dir.path().join("dev-a/metadata.json");
    fs::create_dir_all(bad.parent().unwrap())?;
    fs::write(&bad, "{broken")?;
    let good = write_metadata(&dir, "dev-b/metadata.json", &json!({"floor": "1"}));

    assert_cmd::Command::cargo_bin("metafix")?
        .args(["set", "floor", "2", "--root", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing"));

    assert_eq!(read_metadata(&good), json!({"floor": "2"}));
    Ok(())
}
