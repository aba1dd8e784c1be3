//! Runs the built `analyze` binary and checks its exit codes and streams.

use std::fs;
use std::process::{Command, Output};

const LOG: &str = concat!(
    r#"{"Action":"pass","Package":"pkg/controllers/a","Test":"TestReconcileFoo","Elapsed":5.0}"#, "\n",
    "# pkg/b [build output]\n",
    r#"{"Action":"pass","Package":"pkg/b","Test":"TestCloneRepo","Elapsed":2.5}"#, "\n",
);

fn analyze(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_analyze"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run analyze")
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = analyze(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: analyze <test-output.json>"), "stderr: {stderr}");
}

#[test]
fn reports_to_stdout_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tests.json");
    let report = dir.path().join("report.md");
    fs::write(&input, LOG).unwrap();

    let output = analyze(&[input.as_os_str(), report.as_os_str()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(&"=".repeat(80)));
    assert!(stdout.contains("Total Tests: 2"));
    assert!(stdout.contains(&format!("Markdown report saved to: {}", report.display())));
    assert!(!stdout.contains("MARKDOWN REPORT"));
    assert!(fs::read_to_string(&report).unwrap().contains("| Integration |"));
}

#[test]
fn missing_input_fails_with_error_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.json");

    let output = analyze(&[input.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("absent.json"));
}
