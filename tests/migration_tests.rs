//! Legacy layout migration and orphan cleanup tests

mod common;

use assert_cmd::Command;

fn modforge_cmd() -> Command {
    Command::cargo_bin("modforge").expect("binary built")
}

#[test]
fn test_legacy_layout_removed_on_install() {
    let project = common::TestProject::new();
    project.seed_store();
    project.write_file(".claude/rules/modforge/old-rule.md", "legacy content");

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();

    assert!(!project.dir_exists(".claude/rules/modforge"));
}

#[test]
fn test_legacy_content_does_not_leak_into_new_layout() {
    let project = common::TestProject::new();
    project.seed_store();
    project.write_file(".claude/rules/modforge/old-rule.md", "legacy content");

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();

    assert!(!project.file_exists(".claude/commands/modforge/old-rule.md"));
    let index = project.read_file(".claude/commands/modforge/index.md");
    assert!(!index.contains("old-rule"));
}

#[test]
fn test_legacy_layout_removed_even_with_empty_store() {
    let project = common::TestProject::new();
    project.seed_empty_store();
    project.write_file(".claude/rules/modforge/old-rule.md", "legacy content");

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();

    assert!(!project.dir_exists(".claude/rules/modforge"));
    assert!(project.file_exists(".claude/commands/modforge/index.md"));
}

#[test]
fn test_stale_artifacts_removed_on_reinstall() {
    let project = common::TestProject::new();
    project.seed_store();

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();
    assert!(project.file_exists(".claude/commands/modforge/web/agents/ux.md"));

    // Module disappears from the store; a stray hand-written file appears
    std::fs::remove_dir_all(project.path.join("modules/web")).expect("remove module");
    project.write_file(".claude/commands/modforge/core/agents/handmade.md", "stray");

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();

    assert!(!project.dir_exists(".claude/commands/modforge/web"));
    assert!(!project.file_exists(".claude/commands/modforge/core/agents/handmade.md"));
    let index = project.read_file(".claude/commands/modforge/index.md");
    assert!(!index.contains("WEB"));
}

#[test]
fn test_sibling_config_content_untouched() {
    let project = common::TestProject::new();
    project.seed_store();
    project.write_file(".claude/settings.json", "{}");
    project.write_file(".claude/commands/other-tool/cmd.md", "other tool");

    modforge_cmd()
        .current_dir(&project.path)
        .args(["install"])
        .assert()
        .success();

    assert!(project.file_exists(".claude/settings.json"));
    assert!(project.file_exists(".claude/commands/other-tool/cmd.md"));
}
