//! Integration tests for CLI configuration loading.
//!
//! Responsibilities:
//! - Verify that `.env` file values are respected when loaded before CLI parsing.
//! - Validate priority order: environment variables < CLI flags.
//!
//! Does NOT:
//! - Use the shared `repotools_cmd` helper for dotenv tests, since those
//!   need `DOTENV_DISABLED` unset.

mod common;

use std::fs;

use common::repotools_cmd_with_base_url;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] }))
}

#[tokio::test]
async fn test_dotenv_provides_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/rest/v1/assets"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        format!("NEXUS_BASE_URL={}\n", server.uri()),
    )
    .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repotools")
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("NEXUS_BASE_URL")
        .env_remove("NEXUS_USERNAME")
        .env_remove("NEXUS_PASSWORD")
        .args(["assets", "--repository", "raw-hosted"])
        .assert()
        .success();
}

#[test]
fn test_invalid_dotenv_fails_before_parsing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repotools")
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .args(["assets", "--repository", "raw-hosted"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load environment"));
}

#[tokio::test]
async fn test_cli_credentials_override_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(basic_auth("cli-user", "cli-pass"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&server)
        .await;

    repotools_cmd_with_base_url(&server.uri())
        .env("NEXUS_USERNAME", "env-user")
        .env("NEXUS_PASSWORD", "env-pass")
        .args([
            "--username",
            "cli-user",
            "--password",
            "cli-pass",
            "assets",
            "--repository",
            "raw-hosted",
        ])
        .assert()
        .success();
}

#[test]
fn test_username_without_password_rejected() {
    repotools_cmd_with_base_url("http://localhost:8081")
        .env("NEXUS_USERNAME", "admin")
        .args(["assets", "--repository", "raw-hosted"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_timeout_out_of_range_rejected() {
    repotools_cmd_with_base_url("http://localhost:8081")
        .env("NEXUS_TIMEOUT", "0")
        .args(["assets", "--repository", "raw-hosted"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_invalid_base_url_rejected() {
    repotools_cmd_with_base_url("ftp://nexus.example.com")
        .args(["assets", "--repository", "raw-hosted"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scheme must be http or https"));
}
