//! CLI integration tests

use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    let mut full_args = vec!["run", "-p", "gpumkt-cli", "--"];
    full_args.extend_from_slice(args);
    Command::new("cargo")
        .args(full_args)
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("GPU Market Dashboard"),
        "Should show app name"
    );
    assert!(stdout.contains("summary"), "Should show summary command");
    assert!(stdout.contains("matrix"), "Should show matrix command");
    assert!(stdout.contains("gpu"), "Should show gpu command");
    assert!(stdout.contains("news"), "Should show news command");
    assert!(stdout.contains("analyst"), "Should show analyst command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("gpumkt"), "Should show binary name");
}

/// Test gpu subcommand help
#[test]
fn test_gpu_help() {
    let output = run_cli(&["gpu", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Gpu help should succeed");
    assert!(stdout.contains("<ID>"), "Should show id argument");
}

/// Test analyst subcommand help
#[test]
fn test_analyst_help() {
    let output = run_cli(&["analyst", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Analyst help should succeed");
    assert!(stdout.contains("--gpu"), "Should show gpu option");
    assert!(stdout.contains("--nocache"), "Should show nocache option");
    assert!(stdout.contains("SECTION"), "Should show section argument");
}

/// Test format option
#[test]
fn test_format_option() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test api-url option
#[test]
fn test_api_url_option() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--api-url"), "Should show api-url option");
    assert!(stdout.contains("GPUMKT_API_URL"), "Should show env var");
}

/// Test supply-chain command is exposed with kebab-case name
#[test]
fn test_supply_chain_command() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("supply-chain"),
        "Should show supply-chain command"
    );
    assert!(stdout.contains("model-fit"), "Should show model-fit command");
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = run_cli(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_argument() {
    let output = run_cli(&["gpu"]);

    assert!(!output.status.success(), "Missing argument should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}
