//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{agenda_cmd, agenda_in};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    agenda_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".agenda/store").is_dir());

    let content = fs::read_to_string(temp.path().join(".agenda/config.toml")).unwrap();
    assert!(content.contains("grace_seconds = 60"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    agenda_cmd().arg("init").arg(temp.path()).assert().success();
    agenda_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_commands_outside_agenda_fail() {
    let temp = TempDir::new().unwrap();

    agenda_in(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("agenda init"));
}

#[test]
fn test_discovers_root_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    agenda_cmd().arg("init").arg(temp.path()).assert().success();
    let nested = temp.path().join("deep/er");
    fs::create_dir_all(&nested).unwrap();

    agenda_in(&nested)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: none"));
}

#[test]
fn test_agenda_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    agenda_cmd().arg("init").arg(temp.path()).assert().success();

    agenda_in(elsewhere.path())
        .env("AGENDA_ROOT", temp.path())
        .arg("status")
        .assert()
        .success();

    agenda_in(temp.path())
        .env("AGENDA_ROOT", elsewhere.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AGENDA_ROOT"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();
    agenda_cmd().arg("init").arg(temp.path()).assert().success();

    agenda_in(temp.path())
        .args(["config", "grace_seconds", "120"])
        .assert()
        .success();

    agenda_in(temp.path())
        .args(["config", "grace_seconds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    agenda_cmd().arg("init").arg(temp.path()).assert().success();

    agenda_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grace_seconds = 60"))
        .stdout(predicate::str::contains("date_format"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    agenda_cmd().arg("init").arg(temp.path()).assert().success();

    agenda_in(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}
