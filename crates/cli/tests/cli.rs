use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn splits_a_python_file_end_to_end() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let file = input.path().join("app.py");
    fs::write(&file, "import os\n\ndef main():\n    return 0\n").unwrap();

    Command::cargo_bin("source-splitter")
        .unwrap()
        .arg(&file)
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("processed 1 file(s), skipped 0"));

    assert!(output.path().join("app.py").exists());
    assert!(output.path().join("app/imports.py").exists());
    assert!(output.path().join("app/main.py").exists());
}

#[test]
fn json_summary_is_machine_readable() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("data.xyz"), "not source").unwrap();

    Command::cargo_bin("source-splitter")
        .unwrap()
        .arg(input.path())
        .arg(output.path())
        .arg("--json")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skipped\":1"));
}

#[test]
fn missing_input_reports_and_exits_cleanly() {
    let output = tempfile::tempdir().unwrap();

    Command::cargo_bin("source-splitter")
        .unwrap()
        .arg("does/not/exist.py")
        .arg(output.path())
        .assert()
        .success();
}
