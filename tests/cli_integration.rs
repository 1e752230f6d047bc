/*!
 * End-to-end tests for the treescribe binary
 */

use std::fs::{self, File};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn treescribe(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("treescribe").expect("binary builds");
    // Keep the test hermetic: never pick up the developer's settings file.
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn file_subcommand_writes_the_expected_tree() {
    let temp = tempdir().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir_all(proj.join("src")).unwrap();
    File::create(proj.join("src").join("a.ts")).unwrap();
    File::create(proj.join("src").join("b.ts")).unwrap();
    fs::create_dir(proj.join("node_modules")).unwrap();
    File::create(proj.join("node_modules").join("x")).unwrap();
    File::create(proj.join("readme.md")).unwrap();

    treescribe(temp.path())
        .args([
            "file",
            proj.to_str().unwrap(),
            "--contents",
            "all",
            "--output",
            "structure.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Structure saved to: proj/structure.txt",
        ));

    let written = fs::read_to_string(proj.join("structure.txt")).unwrap();
    assert_eq!(
        written,
        "proj/\n|-- src/\n|   |-- a.ts\n|   |-- b.ts\n|-- readme.md\n"
    );
}

#[test]
fn folders_only_excludes_files() {
    let temp = tempdir().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir_all(proj.join("src")).unwrap();
    File::create(proj.join("src").join("main.rs")).unwrap();

    treescribe(temp.path())
        .args([
            "file",
            proj.to_str().unwrap(),
            "--contents",
            "folders",
            "--output",
            "structure.txt",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(proj.join("structure.txt")).unwrap();
    assert_eq!(written, "proj/\n|-- src/\n");
}

#[test]
fn rerun_does_not_list_its_own_output() {
    let temp = tempdir().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir(&proj).unwrap();
    File::create(proj.join("readme.md")).unwrap();

    for _ in 0..2 {
        treescribe(temp.path())
            .args([
                "file",
                proj.to_str().unwrap(),
                "--contents",
                "all",
                "--output",
                "structure.txt",
            ])
            .assert()
            .success();
    }

    let written = fs::read_to_string(proj.join("structure.txt")).unwrap();
    assert_eq!(written, "proj/\n|-- readme.md\n");
}

#[test]
fn extra_ignores_from_the_flag_are_honoured() {
    let temp = tempdir().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir_all(proj.join("target")).unwrap();
    fs::create_dir_all(proj.join("src")).unwrap();

    treescribe(temp.path())
        .args([
            "file",
            proj.to_str().unwrap(),
            "--contents",
            "folders",
            "--output",
            "structure.txt",
            "--ignore",
            "target",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(proj.join("structure.txt")).unwrap();
    assert_eq!(written, "proj/\n|-- src/\n");
}

#[test]
fn missing_folder_fails_with_a_message() {
    let temp = tempdir().unwrap();

    treescribe(temp.path())
        .args([
            "file",
            "/definitely/not/a/real/directory",
            "--contents",
            "all",
            "--output",
            "structure.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error generating the structure"));
}

// XDG_CONFIG_HOME only steers `dirs` on Linux.
#[cfg(target_os = "linux")]
#[test]
fn settings_file_ignores_are_merged() {
    let temp = tempdir().unwrap();
    let config_dir = temp.path().join("treescribe");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("settings.json"),
        r#"{ "ignore": ["secrets"] }"#,
    )
    .unwrap();

    let proj = temp.path().join("proj");
    fs::create_dir_all(proj.join("secrets")).unwrap();
    fs::create_dir_all(proj.join("src")).unwrap();

    treescribe(temp.path())
        .args([
            "file",
            proj.to_str().unwrap(),
            "--contents",
            "folders",
            "--output",
            "structure.txt",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(proj.join("structure.txt")).unwrap();
    assert_eq!(written, "proj/\n|-- src/\n");
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_settings_file_aborts() {
    let temp = tempdir().unwrap();
    let config_dir = temp.path().join("treescribe");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("settings.json"), "{ not json").unwrap();

    let proj = temp.path().join("proj");
    fs::create_dir(&proj).unwrap();

    treescribe(temp.path())
        .args([
            "file",
            proj.to_str().unwrap(),
            "--contents",
            "all",
            "--output",
            "structure.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings file"));
}
