//! Black-box behavioral specs for the `spindle` binary (spec.md section 6):
//! CLI flag handling, the stdin sentinel, exit codes, and the two verbs
//! (`run`, `parse`). Scheduler semantics themselves are covered at the
//! `spindle-engine` unit level; these specs only exercise what's unique to
//! the CLI boundary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

fn spindle() -> Command {
    Command::cargo_bin("spindle").expect("spindle binary should build")
}

fn workflow_file(dir: &tempfile::TempDir, yaml: &str) -> PathBuf {
    let path = dir.path().join("workflow.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

fn file_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn run_two_independent_steps_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "echo A"
  - name: b
    command: "echo B"
"#,
    );

    spindle()
        .args(["run", "-f", &file_arg(&path)])
        .assert()
        .success();
}

#[test]
fn run_fatal_step_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "false"
"#,
    );

    spindle()
        .args(["run", "-f", &file_arg(&path)])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn run_tolerated_failure_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "false"
    continue_on_fail: true
"#,
    );

    spindle()
        .args(["run", "-f", &file_arg(&path)])
        .assert()
        .success();
}

#[test]
fn run_reads_workflow_from_stdin_sentinel() {
    let yaml = br#"
version: "1"
steps:
  - name: a
    command: "echo A"
"#;

    let mut cmd = spindle();
    cmd.args(["run", "-f", "-"]);
    cmd.write_stdin(yaml.to_vec());
    cmd.assert().success();
}

#[test]
fn run_unresolved_dependency_fails_with_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "echo A"
    depends_on: ["missing"]
"#,
    );

    spindle()
        .args(["run", "-f", &file_arg(&path)])
        .assert()
        .failure()
        .stderr(predicates::str::contains("missing"));
}

#[test]
fn run_missing_file_fails() {
    spindle()
        .args(["run", "-f", "/nonexistent/workflow.yaml"])
        .assert()
        .failure();
}

#[test]
fn run_respects_timeout_flag_and_reports_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "sleep 5"
"#,
    );

    spindle()
        .args(["run", "-f", &file_arg(&path), "--timeout", "100ms"])
        .assert()
        .failure();
}

#[test]
fn run_declining_ask_to_proceed_on_closed_stdin_skips_step_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let path = workflow_file(
        &dir,
        &format!(
            r#"
version: "1"
steps:
  - name: a
    command: "touch {}"
    ask_to_proceed: true
"#,
            marker.display()
        ),
    );

    let mut cmd = spindle();
    cmd.args(["run", "-f", &file_arg(&path)]);
    cmd.write_stdin(Vec::new());
    cmd.assert().success();
    assert!(!marker.exists(), "declined step must never run");
}

#[test]
fn run_yes_flag_bypasses_ask_to_proceed() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let path = workflow_file(
        &dir,
        &format!(
            r#"
version: "1"
steps:
  - name: a
    command: "touch {}"
    ask_to_proceed: true
"#,
            marker.display()
        ),
    );

    spindle()
        .args(["run", "-f", &file_arg(&path), "--yes"])
        .assert()
        .success();
    assert!(marker.exists(), "--yes must bypass the prompt");
}

#[test]
fn parse_emits_enriched_command_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
metadata:
  region: us-east-1
steps:
  - name: build
    command: "echo {{ metadata.region }}"
"#,
    );

    spindle()
        .args(["parse", "-f", &file_arg(&path)])
        .assert()
        .success()
        .stdout(predicates::str::contains("echo us-east-1"));
}

#[test]
fn parse_expands_env_vars_after_templating() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: build
    command: "echo $SPINDLE_SPEC_TEST_VAR"
"#,
    );

    spindle()
        .env("SPINDLE_SPEC_TEST_VAR", "hello")
        .args(["parse", "-f", &file_arg(&path)])
        .assert()
        .success()
        .stdout(predicates::str::contains("echo hello"));
}

#[test]
fn parse_rejects_unsupported_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "2"
steps:
  - name: a
    command: "echo A"
"#,
    );

    spindle()
        .args(["parse", "-f", &file_arg(&path)])
        .assert()
        .failure();
}

#[test]
fn parse_rejects_cyclic_dependency() {
    let dir = tempfile::tempdir().unwrap();
    let path = workflow_file(
        &dir,
        r#"
version: "1"
steps:
  - name: a
    command: "echo A"
    depends_on: ["b"]
  - name: b
    command: "echo B"
    depends_on: ["a"]
"#,
    );

    spindle()
        .args(["parse", "-f", &file_arg(&path)])
        .assert()
        .failure();
}
