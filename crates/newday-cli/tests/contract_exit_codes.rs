use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn newday() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("newday").unwrap();
    cmd.env_remove("NEWDAY_ROOT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn non_integer_day_is_invalid_argument() {
    let temp = tempdir().unwrap();

    newday()
        .current_dir(temp.path())
        .arg("abc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid day 'abc'"));

    let entries = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 0, "no filesystem changes on invalid input");
}

#[test]
fn negative_day_is_invalid_argument() {
    let temp = tempdir().unwrap();

    newday()
        .current_dir(temp.path())
        .arg("-3")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));

    assert!(!temp.path().join("puzzles").exists());
}

#[test]
fn missing_day_is_usage_error() {
    newday().assert().code(2);
}

#[test]
fn missing_template_is_filesystem_error() {
    let temp = tempdir().unwrap();

    newday()
        .current_dir(temp.path())
        .arg("7")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read template"))
        .stderr(predicate::str::contains("dayn.rs"));

    assert!(temp.path().join("puzzles/7").is_dir());
    assert!(!temp.path().join("src/puzzles/day7.rs").exists());
}
