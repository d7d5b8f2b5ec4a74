//! Integration tests for the CLI.
//!
//! Each test shells out through `cargo run` against a fixture written to a
//! temp directory.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let page = dir.join("page.html");
    fs::write(
        &page,
        r#"<html><body>
            <a href="/first">first</a>
            <a href="/second">second</a>
            <p>tel: 123-456</p>
        </body></html>"#,
    )
    .unwrap();
    page
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn help_lists_commands() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("content"));
    assert!(stdout.contains("value"));
    assert!(stdout.contains("matches"));
}

#[test]
fn content_prints_one_hit_per_line() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(dir.path());

    let output = run(&["content", page.to_str().unwrap(), "//a"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["first", "second"]);
}

#[test]
fn attr_with_json_output() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(dir.path());

    let output = run(&["attr", page.to_str().unwrap(), "//a", "href", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<String> = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed, ["/first", "/second"]);
}

#[test]
fn css_flag_switches_translators() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(dir.path());

    let output = run(&["value", page.to_str().unwrap(), "a", "--css"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["first", "second"]);
}

#[test]
fn matches_extracts_capture_group() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(dir.path());

    let output = run(&["matches", page.to_str().unwrap(), r"tel: ([\d-]+)"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "123-456");
}

#[test]
fn missing_file_fails_with_nonzero_exit() {
    let output = run(&["value", "/nonexistent/page.html", "//a"]);
    assert!(!output.status.success());
}
