//! Integration tests for the `lifeline` CLI binary.
//!
//! Argument parsing, config handling and exit codes run without a
//! backend; entity commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `lifeline` binary with env isolation.
///
/// Clears all `LIFELINE_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn lifeline_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lifeline");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("LIFELINE_PROFILE")
        .env_remove("LIFELINE_API_URL")
        .env_remove("LIFELINE_OUTPUT")
        .env_remove("LIFELINE_INSECURE")
        .env_remove("LIFELINE_TIMEOUT")
        .env_remove("LIFELINE_DEFAULT_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run a prepared command off the async runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = TempDir::new().unwrap();
    let output = lifeline_cmd(&home).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home).arg("--help").assert().success().stdout(
        predicate::str::contains("videos")
            .and(predicate::str::contains("gallery"))
            .and(predicate::str::contains("about"))
            .and(predicate::str::contains("press"))
            .and(predicate::str::contains("slides")),
    );
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lifeline"));
}

#[test]
fn test_invalid_subcommand() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .arg("widgets")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invalid_output_format() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["--output", "xml", "videos", "list"])
        .assert()
        .failure()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_respects_xdg() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[defaults]")
                .and(predicate::str::contains("timeout = 15")),
        );
}

#[test]
fn test_config_set_then_show() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["config", "set", "api_url", "http://localhost:4000"])
        .assert()
        .success();
    lifeline_cmd(&home)
        .args(["config", "set", "timeout", "30"])
        .assert()
        .success();

    lifeline_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[profiles.default]")
                .and(predicate::str::contains("api_url = \"http://localhost:4000\""))
                .and(predicate::str::contains("timeout = 30")),
        );

    lifeline_cmd(&home)
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default *"));
}

#[test]
fn test_config_set_rejects_bad_url() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["config", "set", "api_url", "ftp://cms.example.org"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_config_use_unknown_profile() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["config", "use", "staging"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_unknown_profile_flag() {
    let home = TempDir::new().unwrap();
    lifeline_cmd(&home)
        .args(["--profile", "nope", "videos", "list"])
        .assert()
        .failure()
        .code(2);
}

// ── Backend errors ──────────────────────────────────────────────────

#[test]
fn test_unreachable_backend_exit_code() {
    let home = TempDir::new().unwrap();
    let output = lifeline_cmd(&home)
        .args(["--api-url", "http://127.0.0.1:9", "--timeout", "5", "videos", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}

#[test]
fn test_add_validation_fails_before_any_request() {
    let home = TempDir::new().unwrap();
    let output = lifeline_cmd(&home)
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "about",
            "add",
            "--name",
            "Asha",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("Please fill in all required fields"),
        "{text}"
    );
}

// ── Entity commands against a mock backend ──────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_videos_list_normalizes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "5", "title": "Intro", "subtitle": "Welcome", "videourl": "http://x/v.mp4" }
        ])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "-o", "json", "videos", "list"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed[0]["id"], "5");
    assert_eq!(listed[0]["description"], "Welcome");
    assert_eq!(listed[0]["videoUrl"], "http://x/v.mp4");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slides_plain_output_uses_index_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/slider"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "image": "http://x/a.png" }, { "image": "http://x/b.png" } ]
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "-o", "plain", "slides", "list"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0\n1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_about_get_missing_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/about/a1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "about", "get", "a1"]);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(4));
    assert!(
        combined_output(&output).contains("About entry 'a1' not found"),
        "{}",
        combined_output(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_yes_when_not_interactive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "_id": "g1" }])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/gallery/g1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "gallery", "delete", "g1"])
        .write_stdin("");
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes_reports_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "_id": "g1" }])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/gallery/g1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Photo deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "--yes", "gallery", "delete", "g1"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Photo deleted successfully"),
        "{}",
        combined_output(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/press-release"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "--yes", "press", "delete", "p9"]);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("press list"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_press_add_sends_json_and_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/press-release"))
        .and(wiremock::matchers::body_json(json!({
            "title": "Launch",
            "date": "2024-05-01",
            "image": "http://x/p.png"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "_id": "p1", "title": "Launch", "date": "2024-05-01", "image": "http://x/p.png" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/press-release"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args([
        "--api-url",
        &server.uri(),
        "-o",
        "plain",
        "press",
        "add",
        "--title",
        "Launch",
        "--date",
        "2024-05-01",
        "--image-url",
        "http://x/p.png",
    ]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "p1");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Press release added successfully"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gallery_add_uploads_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/gallery"))
        .and(wiremock::matchers::header_regex(
            "content-type",
            "^multipart/form-data",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "g2", "photoUrl": "http://cdn/g2.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let photo = home.path().join("team.jpg");
    std::fs::write(&photo, b"\xFF\xD8\xFF").unwrap();

    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", &server.uri(), "-o", "json", "gallery", "add", "--photo"])
        .arg(&photo);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(created["id"], "g2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_edit_without_flags_is_rejected() {
    let home = TempDir::new().unwrap();
    let mut cmd = lifeline_cmd(&home);
    cmd.args(["--api-url", "http://127.0.0.1:9", "videos", "edit", "5"]);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("nothing to change"));
}
