//! Smoke tests for the teller binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teller(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.env("TELLER_CLI_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn config_command_prints_paths_and_settings() {
    let temp = TempDir::new().unwrap();
    teller(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Teller Configuration"))
        .stdout(predicate::str::contains("Bank name:"));
}

#[test]
fn init_command_writes_settings_file() {
    let temp = TempDir::new().unwrap();
    teller(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp.path().join("config.json").exists());
}

#[test]
fn shell_exits_on_exit_choice() {
    let temp = TempDir::new().unwrap();
    teller(&temp)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn shell_exits_cleanly_on_eof() {
    let temp = TempDir::new().unwrap();
    teller(&temp).write_stdin("").assert().success();
}

#[test]
fn shell_reprompts_on_invalid_choice() {
    let temp = TempDir::new().unwrap();
    teller(&temp)
        .write_stdin("nonsense\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn bank_name_override_is_displayed() {
    let temp = TempDir::new().unwrap();
    teller(&temp)
        .args(["--name", "First National"])
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("First National"));
}
