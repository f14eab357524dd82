#![cfg(unix)]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

#[test]
fn test_seed_data_prints_three_entities_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_seed-data"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().filter(|l| l.starts_with("  → ")).count(), 3);
    assert!(stdout.starts_with("Seeding test data...\n"));
    assert!(stdout.contains("  → Product: 50 records (across 5 categories)"));
    assert!(stdout
        .trim_end()
        .ends_with("✓ Seed data inserted (dry-run — connect to your DB to enable)"));
}

#[test]
fn test_analyze_deps_from_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"com.example:app:jar:1.0\n+- junit:junit:jar:4.13.2:test\n")
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_analyze-deps"))
        .arg("--input")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 2 dependencies"));
    assert!(stdout.contains("  compile: 1 dependencies"));
    assert!(stdout.contains("  test: 1 dependencies"));
}

#[test]
fn test_analyze_deps_exits_one_when_maven_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_analyze-deps"))
        .args(["--maven-cmd", "false"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error running Maven"));
}

#[test]
fn test_analyze_deps_reads_tree_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_analyze-deps"))
        .args(["--input", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"+- a:b:jar:1:test\n\\- c:d:jar:2\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 2 dependencies"));
    assert!(stdout.contains("  compile: 1 dependencies"));
    assert!(stdout.contains("  test: 1 dependencies"));
}

#[test]
fn test_verbose_logs_include_binary_events() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"com.example:app:jar:1.0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_analyze-deps"))
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg("--input")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("analyze-deps config"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("analyze-deps config"));
}

#[test]
fn test_failure_is_logged_from_binary() {
    let output = Command::new(env!("CARGO_BIN_EXE_analyze-deps"))
        .env_remove("RUST_LOG")
        .args(["--input", "/no/such/dependency-tree.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("analyze-deps failed"));
}
