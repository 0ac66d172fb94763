// crates/ugraph-cli/tests/cli_audit.rs
// ============================================================================
// Module: CLI Audit Tests
// Description: Integration tests for audit events emitted by graph commands.
// Purpose: Ensure each command records exactly one event with its outcome.
// Dependencies: ugraph-cli binary, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Configures the file audit sink and checks the JSON lines written for
//! successful and failing commands. Stdout must be unaffected by auditing.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use serde_json::Value;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn run_with_config(dir: &Path, config: &str, args: &[&str], stdin: &str) -> Output {
    let config_path = dir.join("audit.toml");
    fs::write(&config_path, config).expect("write config");
    let mut child = Command::new(env!("CARGO_BIN_EXE_ugraph"))
        .args(args)
        .arg("--config")
        .arg(&config_path)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn ugraph");
    if let Some(mut pipe) = child.stdin.take() {
        // The process may exit before reading stdin (usage errors).
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait ugraph")
}

fn file_sink_config(log: &Path) -> String {
    format!("[audit]\nsink = \"file\"\npath = {:?}\n", log.display().to_string())
}

fn read_events(log: &Path) -> Vec<Value> {
    fs::read_to_string(log)
        .expect("read audit log")
        .lines()
        .map(|line| serde_json::from_str(line).expect("audit line is json"))
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn successful_command_records_graph_facts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("audit.log");
    let output =
        run_with_config(dir.path(), &file_sink_config(&log), &["matrix"], "3 2\n1 2\n1 3\n");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.stdout, b"0 1 1 \n1 0 0 \n1 0 0 \n");

    let events = read_events(&log);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["event"], "graph_command");
    assert_eq!(event["command"], "matrix");
    assert_eq!(event["source"], "stdin");
    assert_eq!(event["outcome"], "success");
    assert_eq!(event["nodes"], 3);
    assert_eq!(event["edges"], 2);
    assert_eq!(event["input_bytes"], 12);
    assert_eq!(event["error"], Value::Null);
}

#[test]
fn failed_command_records_error_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("audit.log");
    let output = run_with_config(dir.path(), &file_sink_config(&log), &["stats"], "2 1\n1 9\n");
    assert!(!output.status.success());

    let events = read_events(&log);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["command"], "stats");
    assert_eq!(event["outcome"], "error");
    assert_eq!(event["nodes"], Value::Null);
    assert_eq!(event["input_bytes"], 8);
    let error = event["error"].as_str().expect("error string");
    assert!(error.starts_with("Failed to parse edge list"), "{error}");
}

#[test]
fn audit_log_appends_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("audit.log");
    let config = file_sink_config(&log);
    run_with_config(dir.path(), &config, &["adjacency"], "1 0\n");
    run_with_config(dir.path(), &config, &["convert", "--to", "json"], "1 0\n");
    let commands: Vec<Value> = read_events(&log).into_iter().map(|e| e["command"].clone()).collect();
    assert_eq!(commands, vec![Value::from("adjacency"), Value::from("convert")]);
}

#[test]
fn stderr_sink_keeps_stdout_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_with_config(dir.path(), "[audit]\nsink = \"stderr\"\n", &["matrix"], "1 0\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"0 \n");
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    let event: Value = serde_json::from_str(stderr.trim()).expect("stderr event json");
    assert_eq!(event["outcome"], "success");
}
