use assert_cmd::Command;
use std::path::Path;

pub fn agenda_cmd() -> Command {
    let mut cmd = Command::cargo_bin("agenda").unwrap();
    cmd.env_remove("AGENDA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an agenda directory
#[allow(dead_code)]
pub fn agenda_in(root: &Path) -> Command {
    let mut cmd = agenda_cmd();
    cmd.current_dir(root);
    cmd
}

/// Initialize `root` and register the "Ana" account
#[allow(dead_code)]
pub fn registered_agenda(root: &Path) {
    agenda_cmd().arg("init").arg(root).assert().success();
    agenda_in(root)
        .args(["register", "--name", "Ana", "--email", "a@x.com", "--password", "p1"])
        .assert()
        .success();
}
