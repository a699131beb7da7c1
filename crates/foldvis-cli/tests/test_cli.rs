use assert_cmd::Command;
use foldvis_test_data::TestFile;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn foldvis() -> Command {
    Command::cargo_bin("foldvis").unwrap()
}

fn derive(input: &str, output: &Path) -> Command {
    let mut cmd = foldvis();
    cmd.arg("derive")
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output);
    cmd
}

#[test]
fn test_derive_csv() {
    let (csvfile, _tmp) = TestFile::residues_01().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("derived.csv");

    derive(&csvfile, &out).assert().success();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("UniAcc,POS,RES,"));
    assert!(lines[0].contains(",pLDDT,"));
    assert!(lines[0].ends_with("x_coord_mean,y_coord_mean,z_coord_mean,secondary,secondary_str"));
    assert!(lines[1].ends_with(",2.5,2.5,2.5,2,HELIX"));
    assert!(lines[2].ends_with(",2.0,-2.5,25.25,3,STRAND"));
    assert!(lines[4].ends_with(",BEND"));
    assert!(lines[5].ends_with(",TURN"));
}

#[test]
fn test_derive_is_idempotent() {
    let (csvfile, _tmp) = TestFile::residues_01().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    derive(&csvfile, &first).assert().success();
    derive(first.to_str().unwrap(), &second).assert().success();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_column_fails_before_output() {
    let (csvfile, _tmp) = TestFile::residues_missing_column().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("derived.csv");

    let assert = derive(&csvfile, &out).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("x_coord_n"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn test_conflicting_flags() {
    let (csvfile, _tmp) = TestFile::residues_conflict().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let strict = dir.path().join("strict.csv");
    let resolved = dir.path().join("resolved.csv");

    let assert = derive(&csvfile, &strict).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("P01137:2"), "stderr: {stderr}");
    assert!(!strict.exists());

    derive(&csvfile, &resolved)
        .arg("--policy")
        .arg("precedence")
        .assert()
        .success();
    let text = fs::read_to_string(&resolved).unwrap();
    let labels: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(labels, vec!["HELIX", "STRAND", "HELIX"]);
}

#[test]
fn test_derive_json_for_accession() {
    let (csvfile, _tmp) = TestFile::residues_01().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("P09651.json");

    derive(&csvfile, &out)
        .arg("--accession")
        .arg("P09651")
        .arg("--format")
        .arg("json")
        .arg("--colors")
        .assert()
        .success();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row["UniAcc"] == "P09651"));
    assert_eq!(rows[0]["secondary_str"], "BEND");
    assert_eq!(rows[0]["secondary_color"], "#e41a1c");
    assert_eq!(rows[0]["x_coord_mean"], 11.5);
    // the residue with a missing N coordinate
    assert!(rows[2]["y_coord_mean"].is_null());
}

#[test]
fn test_summary() {
    let (csvfile, _tmp) = TestFile::residues_01().create_temp().unwrap();
    let assert = foldvis()
        .arg("summary")
        .arg("--input")
        .arg(&csvfile)
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["residues"], 6);
    assert_eq!(report["per_accession"]["P01137"], 3);
    assert_eq!(report["residue_types"]["ALA"], 2);
    assert_eq!(report["secondary"]["NONE"], 2);
    assert_eq!(report["secondary"]["HELIX"], 1);
}

#[test]
fn test_neighbors() {
    let (csvfile, _tmp) = TestFile::residues_01().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("neighbors.json");

    foldvis()
        .arg("neighbors")
        .arg("-i")
        .arg(&csvfile)
        .arg("-o")
        .arg(&out)
        .arg("--count")
        .arg("1")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let pairs: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let pairs = pairs.as_array().unwrap();
    // self plus one neighbour for each of the six residues
    assert_eq!(pairs.len(), 12);
    assert_eq!(pairs[0]["POS_x"], 1);
    assert_eq!(pairs[0]["POS_y"], 1);
    assert_eq!(pairs[0]["distance_ca"], 0.0);
    assert!(pairs.iter().all(|p| p["UniAcc"] == "P01137" || p["UniAcc"] == "P09651"));
}

#[test]
fn test_modifications() {
    let (csvfile, _tmp) = TestFile::modifications_01().create_temp().unwrap();
    let assert = foldvis()
        .arg("modifications")
        .arg("-i")
        .arg(&csvfile)
        .arg("-a")
        .arg("P09651")
        .assert()
        .success();
    let counts: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let counts = counts.as_array().unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0]["MOD"], "Acetylation");
    assert_eq!(counts[0]["PathogenicMutation"], true);
    assert_eq!(counts[1]["count"], 2);
}

#[test]
fn test_modifications_export() {
    let (csvfile, _tmp) = TestFile::modifications_01().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("P09651_mods.json");

    foldvis()
        .arg("modifications")
        .arg("-i")
        .arg(&csvfile)
        .arg("-a")
        .arg("P09651")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let records: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|m| m["UniAcc"] == "P09651"));
    assert_eq!(records[2]["POS"], 15);
    assert_eq!(records[2]["RES"], "K");
    assert_eq!(records[2]["MOD"], "Acetylation");
    assert_eq!(records[2]["PathogenicMutation"], true);
}

#[test]
fn test_unreadable_flag_fails_before_output() {
    let (csvfile, _tmp) = TestFile::residues_unreadable_flag().create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("derived.csv");

    let assert = derive(&csvfile, &out).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("STRN"), "stderr: {stderr}");
    assert!(stderr.contains("\"on\""), "stderr: {stderr}");
    assert!(!out.exists());
}
