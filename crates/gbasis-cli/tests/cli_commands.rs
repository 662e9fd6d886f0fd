use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_gbasis(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gbasis"))
        .args(args)
        .env_remove("GBASIS_LOG")
        .output()
        .expect("gbasis binary should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, contents).expect("file should be written");
}

#[test]
fn fac2_prints_double_factorial() {
    let output = run_gbasis(&["fac2", "7"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "105");

    let output = run_gbasis(&["fac2", "-3"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "1");
}

#[test]
fn fac2_overflow_exits_with_computation_code() {
    let output = run_gbasis(&["fac2", "40"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("ERROR: [RUN.INTEGER_OVERFLOW]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 4"), "stderr: {stderr}");

    let wrapped = run_gbasis(&["fac2", "40", "--wrapping"]);
    assert!(wrapped.status.success(), "stderr: {}", stderr_of(&wrapped));
}

#[test]
fn binom_prints_coefficient_and_rejects_swapped_arguments() {
    let output = run_gbasis(&["binom", "5", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "10");

    let output = run_gbasis(&["binom", "2", "5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("INPUT.BINOMIAL_ARGS"));
}

#[test]
fn nbasis_counts_shells_and_reports_invalid_code() {
    for (shell_type, expected) in [("2", "6"), ("-2", "5"), ("0", "1")] {
        let output = run_gbasis(&["nbasis", shell_type]);
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        assert_eq!(stdout_of(&output).trim(), expected);
    }

    let output = run_gbasis(&["nbasis", "-1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.SHELL_TYPE]"));

    let legacy = run_gbasis(&["nbasis", "-1", "--legacy"]);
    assert!(legacy.status.success(), "stderr: {}", stderr_of(&legacy));
    assert_eq!(stdout_of(&legacy).trim(), "-1");
}

#[test]
fn max_shell_type_uses_build_default_or_config() {
    let output = run_gbasis(&["max-shell-type"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "7");

    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("config/shells.json");
    write_file(&config_path, r#"{ "maxShellType": 3 }"#);
    let config = config_path.to_str().expect("utf-8 path");

    let output = run_gbasis(&["max-shell-type", "--config", config]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "3");
}

#[test]
fn oversized_config_bound_is_rejected() {
    let temp = TempDir::new().expect("tempdir should be created");
    for (name, contents) in [
        ("eight.json", r#"{ "maxShellType": 8 }"#),
        ("huge.json", r#"{ "maxShellType": 9223372036854775807 }"#),
    ] {
        let config_path = temp.path().join(name);
        write_file(&config_path, contents);
        let config = config_path.to_str().expect("utf-8 path");

        for command in ["max-shell-type", "shells"] {
            let output = run_gbasis(&[command, "--config", config]);
            assert_eq!(output.status.code(), Some(2), "{command} {name}");
            assert!(stdout_of(&output).is_empty(), "{command} {name}");
            assert!(stderr_of(&output).contains("ERROR: [INPUT.SHELL_CONFIG]"));
        }
    }
}

#[test]
fn missing_config_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("missing.json");
    let output = run_gbasis(&[
        "max-shell-type",
        "--config",
        missing.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_of(&output).contains("IO.SHELL_CONFIG"));
}

#[test]
fn shells_json_lists_every_valid_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("shells.json");
    write_file(&config_path, r#"{ "maxShellType": 2 }"#);

    let output = run_gbasis(&[
        "shells",
        "--config",
        config_path.to_str().expect("utf-8 path"),
        "--json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout should be JSON");
    let rows = parsed.as_array().expect("rows should be an array");
    let codes: Vec<i64> = rows
        .iter()
        .map(|row| row["shellType"].as_i64().expect("shellType"))
        .collect();
    assert_eq!(codes, vec![-2, 0, 1, 2]);
    assert_eq!(rows[0]["label"], "d");
    assert_eq!(rows[0]["convention"], "pure");
    assert_eq!(rows[0]["nbasis"], 5);
    assert_eq!(rows[3]["convention"], "cartesian");
    assert_eq!(rows[3]["nbasis"], 6);
}

#[test]
fn shells_text_table_has_header_and_rows() {
    let output = run_gbasis(&["shells"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("shell_type"));
    assert_eq!(lines.len(), 1 + 14);
}

#[test]
fn cartesian_lists_exponents_in_alphabetical_order() {
    let output = run_gbasis(&["cartesian", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let labels: Vec<String> = stdout_of(&output)
        .lines()
        .map(|line| line.split_whitespace().last().unwrap_or_default().to_string())
        .collect();
    assert_eq!(labels, ["xx", "xy", "xz", "yy", "yz", "zz"]);
}

#[test]
fn parse_reports_codes_and_total() {
    let output = run_gbasis(&["parse", "spd", "--pure"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["0 1 -2", "nbasis: 9"]);

    let output = run_gbasis(&["parse", "spq"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_command_is_usage_error() {
    let output = run_gbasis(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("INPUT.CLI_USAGE"));
}
