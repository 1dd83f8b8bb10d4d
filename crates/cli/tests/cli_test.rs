//! End-to-end tests for the runc binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A runc command isolated from the user's environment and config
fn runc(tmp: &Path) -> Command {
    let mut cmd = Command::cargo_bin("runc").unwrap();
    cmd.env_remove("EDITOR")
        .env_remove("VISUAL")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", tmp.join("config-home"))
        .env("TMPDIR", tmp);
    cmd
}

/// Shell script standing in for an editor: writes `code` into its argument
#[cfg(unix)]
fn fake_editor(dir: &Path, code: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-editor.sh");
    let source = dir.join("fake-editor.src");
    fs::write(&source, code).unwrap();
    fs::write(
        &script,
        format!("#!/bin/sh\ncp '{}' \"$1\"\n", source.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn tool_available(program: &str) -> bool {
    std::process::Command::new(program)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn scratch_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("runc_runner") || name == "a.out")
        .collect()
}

#[test]
fn test_no_language_is_language_error() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .env("EDITOR", "true")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Language has to be specified"));

    assert!(scratch_files(tmp.path()).is_empty());
}

#[test]
fn test_unsupported_language() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .arg("cobol")
        .env("EDITOR", "true")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported language \"cobol\""));
}

#[test]
fn test_editor_unset() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .arg("python")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Try setting EDITOR environment variable"));

    assert!(scratch_files(tmp.path()).is_empty());
}

#[test]
fn test_failing_editor_cleans_up() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .arg("python")
        .env("EDITOR", "false")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to run the editor"));

    assert!(scratch_files(tmp.path()).is_empty());
}

#[test]
fn test_editor_from_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("runc.json");
    fs::write(&config, r#"{ "editor_var": "RUNC_TEST_EDITOR" }"#).unwrap();

    runc(tmp.path())
        .arg("python")
        .arg("--config")
        .arg(&config)
        .env("EDITOR", "true")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RUNC_TEST_EDITOR"));
}

#[test]
fn test_malformed_config_is_internal_error() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("runc.json");
    fs::write(&config, "{ nope").unwrap();

    runc(tmp.path())
        .arg("python")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_no_language_ignores_broken_user_config() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join("config-home").join("runc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ nope").unwrap();

    runc(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Language has to be specified"))
        .stderr(predicate::str::contains("Failed to load").not());
}

#[test]
fn test_ls_lists_languages() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .arg("--ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains(".c"));
}

#[test]
fn test_aliases_lists_aliases() {
    let tmp = TempDir::new().unwrap();
    runc(tmp.path())
        .arg("-a")
        .assert()
        .success()
        .stdout(predicate::str::contains("py : python"));
}

#[cfg(unix)]
#[test]
fn test_python_scenario() {
    if !tool_available("python3") {
        eprintln!("python3 not available, skipping");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let editor = fake_editor(tmp.path(), "print(1+1)\n");

    runc(tmp.path())
        .arg("python")
        .env("EDITOR", &editor)
        .assert()
        .success()
        .stdout("2\n\n");

    assert!(scratch_files(tmp.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_c_scenario() {
    if !tool_available("gcc") {
        eprintln!("gcc not available, skipping");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let editor = fake_editor(
        tmp.path(),
        "#include <stdio.h>\nint main(void) { printf(\"hello from c\\n\"); return 0; }\n",
    );

    runc(tmp.path())
        .arg("c")
        .env("EDITOR", &editor)
        .assert()
        .success()
        .stdout("hello from c\n\n");

    assert!(scratch_files(tmp.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_c_syntax_error_scenario() {
    if !tool_available("gcc") {
        eprintln!("gcc not available, skipping");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let editor = fake_editor(tmp.path(), "int main(void) { return 0 }\n");

    runc(tmp.path())
        .arg("c")
        .env("EDITOR", &editor)
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gcc"))
        .stderr(predicate::str::contains("error"));

    assert!(scratch_files(tmp.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_program_args_are_forwarded() {
    if !tool_available("python3") {
        eprintln!("python3 not available, skipping");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let editor = fake_editor(tmp.path(), "import sys\nprint(' '.join(sys.argv[1:]))\n");

    runc(tmp.path())
        .arg("py")
        .arg("--argv")
        .arg("one two")
        .env("EDITOR", &editor)
        .assert()
        .success()
        .stdout("one two\n\n");
}
