//! End-to-end tests for the runlet binary

use assert_cmd::Command;
use predicates::prelude::*;

fn runlet() -> Command {
    Command::cargo_bin("runlet").expect("binary builds")
}

fn write_snippet(dir: &tempfile::TempDir, name: &str, code: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, code).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn detect_ranks_python_snippet_first() {
    let dir = tempfile::tempdir().unwrap();
    let snippet = write_snippet(
        &dir,
        "snippet.txt",
        "import os\n\ndef main():\n    print(os.getcwd())\n",
    );

    runlet()
        .args(["detect", &snippet, "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python"));
}

#[test]
fn detect_reads_stdin_when_no_file_given() {
    runlet()
        .arg("detect")
        .write_stdin("const x = () => console.log(1);\nlet y = 2;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript"));
}

#[test]
fn detect_json_output_is_structured() {
    runlet()
        .args(["detect", "--json"])
        .write_stdin("@echo off\necho hi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"batch\""))
        .stdout(predicate::str::contains("\"confidence\": 0.98"));
}

#[test]
fn detect_uses_configured_confidence_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".runlet.json"),
        r#"{"confidence": {"lower": 0.99, "upper": 0.995}}"#,
    )
    .unwrap();

    // 0.98 classifies high against the defaults, low against these bounds
    runlet()
        .current_dir(dir.path())
        .args(["detect", "--top", "1"])
        .write_stdin("@echo off\necho hi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("low"))
        .stdout(predicate::str::contains("high").not());
}

#[test]
fn detect_fails_on_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".runlet.json"), "{not json").unwrap();

    runlet()
        .current_dir(dir.path())
        .arg("detect")
        .write_stdin("print(1)\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn detect_rejects_zero_top_count() {
    runlet()
        .args(["detect", "--top", "0"])
        .write_stdin("print(1)\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("top-n count"));
}

#[test]
fn highlight_reports_comment_over_keyword() {
    runlet()
        .args(["highlight", "--language", "python"])
        .write_stdin("# def foo():\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment"))
        .stdout(predicate::str::contains("keyword").not());
}

#[test]
fn highlight_unknown_language_yields_no_spans() {
    runlet()
        .args(["highlight", "--language", "fortran"])
        .write_stdin("def x():\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spans"));
}

#[test]
fn run_dry_run_prints_composed_command_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();

    runlet()
        .args(["run", "--language", "python", "--dir", &dir_arg, "--dry-run"])
        .write_stdin("print('hi')\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pause"))
        .stdout(predicate::str::contains("runlet_snippet.py"))
        .stdout(predicate::str::contains("Working directory:"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn run_rejects_unsupported_language() {
    runlet()
        .args(["run", "--language", "ruby", "--dry-run"])
        .write_stdin("puts 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn run_refuses_low_confidence_auto_detection() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();

    runlet()
        .args(["run", "--dir", &dir_arg, "--dry-run"])
        .write_stdin("plain prose with no syntax at all\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not confident enough"));
}

#[test]
fn init_writes_config_and_respects_existing() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();

    runlet()
        .args(["init", "--cwd", &dir_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join(".runlet.json").exists());

    runlet()
        .args(["init", "--cwd", &dir_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    runlet()
        .args(["init", "--cwd", &dir_arg, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}
