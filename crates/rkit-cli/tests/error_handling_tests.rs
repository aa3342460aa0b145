//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rkit(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rkit").unwrap();
    cmd.current_dir(temp.path());
    cmd.env("RKIT_REGISTRY", "http://127.0.0.1:9");
    cmd.env_remove("RKIT_TEMPLATES_DIR");
    cmd
}

#[test]
fn error_with_suggestions_unknown_state_management() {
    let temp = TempDir::new().unwrap();
    rkit(&temp)
        .args(["test", "none", "no", "mobx", "none", "no", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("state management"))
        .stderr(predicate::str::contains("redux"))
        .stderr(predicate::str::contains("jotai"));
}

#[test]
fn error_with_suggestions_unknown_data_fetching() {
    let temp = TempDir::new().unwrap();
    rkit(&temp)
        .args(["test", "none", "no", "none", "axios", "no", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data fetching"))
        .stderr(predicate::str::contains("react-query"))
        .stderr(predicate::str::contains("swr"));
}

#[test]
fn error_bool_position_rejects_enum_value() {
    // an out-of-order argument list must fail, not shift values
    let temp = TempDir::new().unwrap();
    rkit(&temp)
        .args(["test", "none", "redux", "no", "none", "no", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("router"));
}

#[test]
fn error_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    rkit(&temp)
        .args(["a/b", "none", "no", "none", "none", "no", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn error_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    rkit(&temp)
        .args(["test", "none", "no", "none", "none", "no", "--yes"])
        .args(["--config", "/nope/missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
