use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_fireprofile_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("fireprofile")
}

#[test]
fn test_completion_bash() {
    let mut cmd = Command::new(get_fireprofile_bin());
    cmd.arg("completion").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_fireprofile"));
}

#[test]
fn test_completion_invalid_shell() {
    let mut cmd = Command::new(get_fireprofile_bin());
    cmd.arg("completion").arg("not-a-shell");

    cmd.assert().failure();
}
