//! End-to-end tests for the plint binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn plint() -> Command {
    Command::cargo_bin("plint").unwrap()
}

/// A resources tree with one root and one redundant child override
fn redundant_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("resources");
    fs::create_dir_all(root.join("definitions")).unwrap();
    fs::create_dir_all(root.join("printers/acme")).unwrap();
    fs::write(
        root.join("definitions/fdmprinter.def.json"),
        r#"{
            "settings": {"speed_print": {"type": "float", "default_value": 50}},
            "overrides": {"speed_print": {"default_value": 50}}
        }"#,
    )
    .unwrap();
    let target = root.join("printers/acme/acme.def.json");
    fs::write(
        &target,
        "{\n  \"inherits\": \"fdmprinter\",\n  \"overrides\": { \"speed_print\": { \"value\": 50.0 } }\n}",
    )
    .unwrap();
    (temp, target)
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(".plintrc.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn lint_reports_redundant_override() {
    let (_temp, target) = redundant_tree();

    plint()
        .args(["lint", "--no-color"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "diagnostic-definition-redundant-override",
        ))
        .stdout(predicate::str::contains("speed_print"))
        .stdout(predicate::str::contains("fdmprinter"));
}

#[test]
fn lint_disabled_check_reports_nothing() {
    let (temp, target) = redundant_tree();
    let config = write_config(
        temp.path(),
        r#"{"checks": {"diagnostic-definition-redundant-override": false}}"#,
    );

    plint()
        .args(["lint", "--no-color", "--config"])
        .arg(&config)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn lint_json_output_is_machine_readable() {
    let (_temp, target) = redundant_tree();

    let output = plint()
        .args(["lint", "--format", "json"])
        .arg(&target)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["files_checked"], 1);
    assert_eq!(payload["summary"]["warnings"], 1);
    assert_eq!(
        payload["issues"][0]["rule_id"],
        "diagnostic-definition-redundant-override"
    );
}

#[test]
fn lint_fix_removes_the_override() {
    let (_temp, target) = redundant_tree();

    plint()
        .args(["lint", "--no-color", "--fix"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixes applied: 1"));

    let rewritten = fs::read_to_string(&target).unwrap();
    assert!(!rewritten.contains("speed_print"));
}

#[test]
fn lint_root_definition_is_clean() {
    let (temp, _target) = redundant_tree();
    let root_def = temp
        .path()
        .join("resources/definitions/fdmprinter.def.json");

    plint()
        .args(["lint", "--no-color"])
        .arg(&root_def)
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn lint_malformed_file_fails_other_files_continue() {
    let (temp, target) = redundant_tree();
    let broken = temp.path().join("resources/printers/acme/broken.def.json");
    fs::write(&broken, "{ not json").unwrap();

    // The broken file is skipped with a warning; the redundant one still
    // produces its diagnostic
    plint()
        .args(["lint", "--no-color"])
        .arg(&broken)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "diagnostic-definition-redundant-override",
        ));
}

#[test]
fn rules_lists_builtin_rules() {
    plint()
        .args(["rules", "--verbose", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "diagnostic-definition-redundant-override",
        ));
}
