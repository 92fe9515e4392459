//! CLI integration tests

use std::net::TcpListener;
use std::process::Command;
use tempfile::TempDir;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("xray stats"), "Should show app description");
    assert!(stdout.contains("stats"), "Should show stats command");
    assert!(stdout.contains("traffic"), "Should show traffic command");
    assert!(stdout.contains("--tls"), "Should show tls option");
    assert!(stdout.contains("--timeout"), "Should show timeout option");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("xstats"), "Should show binary name");
}

/// Test stats subcommand help
#[test]
fn test_stats_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "stats", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Stats help should succeed");
    assert!(stdout.contains("--server"), "Should show server option");
    assert!(stdout.contains("--output-dir"), "Should show output-dir option");
}

/// Test traffic subcommand help
#[test]
fn test_traffic_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "traffic", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Traffic help should succeed");
    assert!(stdout.contains("--user"), "Should show user option");
    assert!(stdout.contains("--inbound"), "Should show inbound option");
    assert!(stdout.contains("--outbound"), "Should show outbound option");
}

/// Test invalid format value
#[test]
fn test_invalid_format() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "xstats-cli",
            "--",
            "--format",
            "invalid",
            "stats",
            "--server",
            "127.0.0.1:10085",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid format should fail");
}

/// Test that an unreachable server fails without writing files
#[test]
fn test_stats_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "stats", "--server"])
        .arg(&address)
        .arg("--output-dir")
        .arg(temp_dir.path())
        .env_remove("XSTATS_CONFIG")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Unreachable server should fail");
    assert!(
        stderr.contains("Failed to query stats"),
        "Should report the failing query"
    );
    assert!(!temp_dir.path().join("sysStats.json").exists());
    assert!(!temp_dir.path().join("stats.json").exists());
}

/// Test that a missing server address is reported
#[test]
fn test_traffic_without_server() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new("cargo")
        .args(["run", "-p", "xstats-cli", "--", "traffic", "--user", "alice"])
        .arg("--output-dir")
        .arg(temp_dir.path())
        .env_remove("XSTATS_SERVER")
        .env_remove("XSTATS_CONFIG")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Missing server should fail");
    assert!(stderr.contains("No server address"), "Should explain the missing server");
    assert!(!temp_dir.path().join("trafficStats.json").exists());
}
