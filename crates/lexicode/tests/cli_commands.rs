#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn lexicode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexicode"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("lexicode should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn encode_outputs_hex_as_json() {
    let output = lexicode(&["--format", "json", "encode", "pair<string,i32>", "[\"a\",5]"]);
    assert!(output.status.success());

    let out: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(out["schema"], "pair<string,i32>");
    assert_eq!(out["hex"], "6100800101010105");
    assert_eq!(out["len"], 8);
    assert_eq!(out["value"], serde_json::json!(["a", 5]));
}

#[test]
fn encode_raw_writes_bytes() {
    let output = lexicode(&["--format", "raw", "encode", "u32", "258"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x00, 0x00, 0x01, 0x02]);
}

#[test]
fn decode_restores_value() {
    let output = lexicode(&[
        "--format",
        "raw",
        "decode",
        "pair<string,i32>",
        "6100800101010105",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[\"a\",5]");
}

#[test]
fn compare_reports_reverse_order() {
    let output = lexicode(&["--format", "json", "compare", "reverse<i64>", "1", "2"]);
    assert!(output.status.success());

    let out: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(out["ordering"], "greater");
}

#[test]
fn compare_bigint_across_lengths() {
    let output = lexicode(&[
        "--format",
        "raw",
        "compare",
        "bigint",
        "\"-1000000000000000000000\"",
        "\"-1\"",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1");
}

#[test]
fn bad_schema_exits_with_usage() {
    let output = lexicode(&["encode", "pair<i32>", "[1]"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid schema"));
}

#[test]
fn bad_input_exits_with_data_invalid() {
    let bad_hex = lexicode(&["decode", "i32", "zz"]);
    assert_eq!(bad_hex.status.code(), Some(60));

    let truncated = lexicode(&["decode", "i32", "8000"]);
    assert_eq!(truncated.status.code(), Some(60));

    let wrong_type = lexicode(&["encode", "i32", "\"five\""]);
    assert_eq!(wrong_type.status.code(), Some(60));
}

#[test]
fn version_prints_package_version() {
    let output = lexicode(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("lexicode {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn extended_version_reports_build() {
    let output = lexicode(&["version", "--extended"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("name: lexicode"));
    assert!(text.contains("profile: "));
    assert!(text.contains("log_env: LEXICODE_LOG"));
}

#[test]
fn log_env_enables_library_events() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexicode"))
        .env("LEXICODE_LOG", "lexicode_schema=debug")
        .args(["--log-level", "error", "encode", "i32", "1"])
        .output()
        .expect("lexicode should run");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("parsed schema"));
}
