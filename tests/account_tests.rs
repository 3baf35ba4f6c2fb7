//! Integration tests for register, login, logout and reset-password

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{agenda_in, registered_agenda};

fn login(root: &std::path::Path, email: &str, password: &str) -> assert_cmd::assert::Assert {
    agenda_in(root)
        .args(["login", "--email", email, "--password", password])
        .assert()
}

#[test]
fn test_register_then_login() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    login(temp.path(), "a@x.com", "p1")
        .success()
        .stdout(predicate::str::contains("Welcome, Ana"));

    login(temp.path(), "a@x.com", "wrong")
        .code(4)
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
fn test_unknown_email_fails_like_wrong_password() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    let unknown = login(temp.path(), "b@x.com", "p1").code(4);
    let wrong = login(temp.path(), "a@x.com", "p2").code(4);

    assert_eq!(unknown.get_output().stderr, wrong.get_output().stderr);
}

#[test]
fn test_register_writes_account_and_remembered_records() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    let store = temp.path().join(".agenda/store");
    let user: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.join("user.json")).unwrap()).unwrap();
    assert_eq!(
        user,
        serde_json::json!({ "name": "Ana", "email": "a@x.com", "password": "p1" })
    );
    assert!(store.join("rememberedUser.json").exists());
}

#[test]
fn test_register_rejects_blank_fields() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .args(["register", "--name", " ", "--email", "b@x.com", "--password", "p2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("name"));

    // Previous account untouched
    login(temp.path(), "a@x.com", "p1").success();
}

#[test]
fn test_login_uses_remembered_credentials() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Ana"))
        .stdout(predicate::str::contains("Login remembered"));

    agenda_in(temp.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("Remembered login: a@x.com"));
}

#[test]
fn test_login_without_anything_remembered_needs_credentials() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());
    agenda_in(temp.path()).arg("logout").assert().success();

    agenda_in(temp.path())
        .args(["login", "--password", "p1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("email"));

    // Explicit credentials work and stay unremembered
    login(temp.path(), "a@x.com", "p1")
        .success()
        .stdout(predicate::str::contains("Login remembered").not());
}

#[test]
fn test_login_forget_clears_remembered() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remembered login: a@x.com"));

    agenda_in(temp.path())
        .args(["login", "--forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login remembered").not());

    agenda_in(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: Ana <a@x.com>"))
        .stdout(predicate::str::contains("Remembered login: none"));
}

#[test]
fn test_login_remember_then_logout() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .args(["login", "--email", "a@x.com", "--password", "p1", "--remember"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login remembered"));

    agenda_in(temp.path()).arg("logout").assert().success();

    assert!(!temp
        .path()
        .join(".agenda/store/rememberedUser.json")
        .exists());
    agenda_in(temp.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("Remembered login: none"));
}

#[test]
fn test_reset_password() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .args(["reset-password", "--email", "a@x.com", "--new-password", "p2"])
        .assert()
        .success();

    login(temp.path(), "a@x.com", "p1").failure();
    login(temp.path(), "a@x.com", "p2").success();
}

#[test]
fn test_reset_password_unknown_email() {
    let temp = TempDir::new().unwrap();
    registered_agenda(temp.path());

    agenda_in(temp.path())
        .args(["reset-password", "--email", "b@x.com", "--new-password", "p2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Email not registered"));
}
