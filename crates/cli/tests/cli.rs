// Path: crates/cli/tests/cli.rs
//! Checks of the `roflscan` binary: argument handling, fatal configuration
//! errors, and runs against a local mock gateway.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use roflscan_types::app::AppId;
use serde_json::json;
use std::io::Write;

fn roflscan() -> Command {
    Command::cargo_bin("roflscan").unwrap()
}

#[test]
fn test_unknown_network_is_usage_error() {
    roflscan()
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'bogus'"))
        .stderr(predicate::str::contains("possible values: testnet, mainnet"));
}

#[test]
fn test_missing_network_is_usage_error() {
    roflscan()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_exits_zero() {
    roflscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("testnet"))
        .stdout(predicate::str::contains("--paratime"));
}

#[test]
fn test_unreadable_config_is_fatal() {
    roflscan()
        .args(["testnet", "--config", "/nonexistent/roflscan/networks.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load network configuration"));
}

#[test]
fn test_network_missing_from_config_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "[networks.testnet]\nchain_context = \"{}\"\ngateway = \"http://127.0.0.1:1/v1/\"\n",
        "00".repeat(32)
    )
    .unwrap();

    roflscan()
        .arg("mainnet")
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Network 'mainnet' not found"));

    roflscan()
        .arg("testnet")
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ParaTime 'sapphire' not found"));
}

fn local_gateway_config(server: &MockServer) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "[networks.testnet]\nchain_context = \"{ctx}\"\ngateway = \"{base}/v1/\"\n\n[networks.testnet.paratimes.sapphire]\nid = \"{ctx}\"\n",
        ctx = "00".repeat(32),
        base = server.base_url()
    )
    .unwrap();
    file
}

#[test]
fn test_instance_failure_prints_one_warning() {
    let server = MockServer::start();
    let id = AppId::from_bytes([3; 21]);
    let key = format!("{}AQE=", "AQEB".repeat(10));

    server.mock(|when, then| {
        when.method(GET).path("/v1/consensus/blocks");
        then.status(200).json_body(json!({
            "blocks": [{"height": 77, "hash": "cd".repeat(32), "timestamp": "2025-01-02T03:04:05Z"}]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/sapphire/rofl_apps/{}", id));
        then.status(200).json_body(json!({
            "id": id.to_string(),
            "admin": null,
            "stake": {"amount": "100", "denomination": ""},
            "sek": key,
            "policy": {"fees": 1, "max_expiration": 2, "enclaves": [], "endorsements": [{"any": {}}]},
            "metadata": {},
            "secrets": {}
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/sapphire/rofl_apps/{}/instances", id));
        then.status(500).body(r#"{"e": "boom"}"#);
    });
    let config = local_gateway_config(&server);

    let assert = roflscan()
        .env_remove("RUST_LOG")
        .arg("testnet")
        .arg(id.to_string())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  Height: 77\n"))
        .stdout(predicate::str::contains("  Instances: <unknown>\n"));

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let warnings: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("Warning") || line.contains("WARN"))
        .collect();
    assert_eq!(warnings.len(), 1, "stderr was: {}", stderr);
    assert!(warnings[0].starts_with("  Warning: Failed to fetch instances: Gateway returned status 500"));
}

#[test]
fn test_fatal_error_codes_are_logged_at_debug() {
    roflscan()
        .env("RUST_LOG", "debug")
        .args(["testnet", "--log-format", "json", "--config", "/nonexistent/roflscan/networks.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_LOAD_FAILED"))
        .stderr(predicate::str::contains("Error: Failed to load network configuration"));
}
