//! Command-line tests for both binaries.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap()
}

#[test]
fn test_missing_folder_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("metadata-export")
        .unwrap()
        .current_dir(dir.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: XML folder not found"));
}

#[test]
fn test_empty_folder_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("xml")).unwrap();

    Command::cargo_bin("metadata-export")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No XML files found"));

    assert!(!dir.path().join("metadata_export_xml.xlsx").exists());
}

#[test]
fn test_export_writes_workbook_named_after_folder() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("soils");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.xml"), fixture("arcgis_complete.xml")).unwrap();
    fs::write(input.join("b.xml"), fixture("malformed.xml")).unwrap();

    Command::cargo_bin("metadata-export")
        .unwrap()
        .current_dir(dir.path())
        .arg("soils")
        .env_remove("METADATA_OBLIGATION_PROFILE")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: a.xml"))
        .stdout(predicate::str::contains("Error processing b.xml"))
        .stdout(predicate::str::contains("Total files processed: 1"))
        .stdout(predicate::str::contains("1 compliant"));

    assert!(dir.path().join("metadata_export_soils.xlsx").is_file());
}

#[test]
fn test_export_uses_profile_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("xml");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.xml"), fixture("arcgis_complete.xml")).unwrap();
    let profile = dir.path().join("profile.yaml");
    fs::write(&profile, "Credit: mandatory\n").unwrap();

    Command::cargo_bin("metadata-export")
        .unwrap()
        .current_dir(dir.path())
        .env("METADATA_OBLIGATION_PROFILE", &profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 compliant, 1 with missing"));
}

#[test]
fn test_conformance_reports_skipped_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("xml");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("arcgis.xml"), fixture("arcgis_complete.xml")).unwrap();
    fs::write(input.join("iso.xml"), fixture("iso_complete.xml")).unwrap();

    Command::cargo_bin("conformance-check")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked: 1"))
        .stdout(predicate::str::contains("Not ISO 19139 namespaced"));

    assert!(dir.path().join("conformance_report_xml.xlsx").is_file());
}
