/*!
 * Integration test for clipboard delivery
 */

use std::env;
use std::fs::{self, File};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
#[ignore] // This test requires tmux to be running and is ignored by default
          // To run it manually: cargo test --test clipboard_integration -- --ignored
fn clip_subcommand_fills_the_tmux_buffer() {
    // Skip if not in a tmux session
    if env::var("TMUX").is_err() {
        return;
    }

    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    File::create(temp.path().join("notes.txt")).unwrap();

    Command::cargo_bin("treescribe")
        .unwrap()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["clip", temp.path().to_str().unwrap(), "--contents", "all"])
        .assert()
        .success();

    let buffer = StdCommand::new("tmux")
        .args(["show-buffer"])
        .output()
        .unwrap();
    let clipboard = String::from_utf8_lossy(&buffer.stdout);

    assert!(clipboard.contains("|-- docs/"));
    assert!(clipboard.contains("|-- notes.txt"));
}
