//! CLI surface tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn modforge_cmd() -> Command {
    Command::cargo_bin("modforge").expect("binary built")
}

#[test]
fn test_help_lists_commands() {
    modforge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("launcher"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_command() {
    modforge_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modforge"));
}

#[test]
fn test_unknown_command_fails() {
    modforge_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_completions_bash() {
    modforge_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modforge"));
}

#[test]
fn test_project_root_flag() {
    let project = common::TestProject::new();
    project.seed_store();

    modforge_cmd()
        .args(["-C", project.path.to_str().expect("utf8 path"), "install"])
        .assert()
        .success();

    assert!(project.file_exists(".claude/commands/modforge/index.md"));
}
