//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! Every test pins the offline resolver or clears the API key so nothing
//! leaves the machine.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a settings file that pins the offline resolver
fn cli_cmd(settings: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("aetherflow").expect("Failed to find aetherflow binary");
    cmd.arg("--config").arg(settings.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn offline_settings() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"resolver": "offline"}}"#).unwrap();
    file
}

// ============================================================================
// Templates Command Tests
// ============================================================================

#[test]
fn test_templates_lists_all_six() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("HEARTS"))
        .stdout(predicate::str::contains("FLOWERS"))
        .stdout(predicate::str::contains("SATURN"))
        .stdout(predicate::str::contains("FIREWORKS"))
        .stdout(predicate::str::contains("GALAXY (default)"))
        .stdout(predicate::str::contains("DNA"));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_offline() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["theme", "Neon", "Sakura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: FLOWERS"))
        .stdout(predicate::str::contains("#ff00d4"))
        .stdout(predicate::str::contains("Neon Sakura"));
}

#[test]
fn test_theme_json() {
    let settings = offline_settings();

    let output = cli_cmd(&settings)
        .args(["theme", "--json", "Deep Sea"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["template"], "GALAXY");
    assert_eq!(value["config"]["color1"], "#00c2ff");
    assert_eq!(value["config"]["color2"], "#001f6b");
}

#[test]
fn test_theme_blank_prompt_fails() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["theme", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt is empty"));
}

#[test]
fn test_theme_gemini_without_key_fails() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["theme", "--resolver", "gemini", "aurora"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gemini"));
}

#[test]
fn test_theme_unknown_resolver_fails() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["theme", "--resolver", "oracle", "aurora"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle"));
}

// ============================================================================
// Gestures and Frame Command Tests
// ============================================================================

#[test]
fn test_gestures_prints_frames() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["gestures", "--frames", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pose"))
        .stdout(predicate::str::contains("open"));
}

#[test]
fn test_frame_reports_field() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["frame", "--template", "saturn", "--steps", "10", "--density", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: SATURN"))
        .stdout(predicate::str::contains("Particles: 600"));
}

#[test]
fn test_frame_unknown_template_fails() {
    let settings = offline_settings();

    cli_cmd(&settings)
        .args(["frame", "--template", "spiral"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spiral"));
}

#[test]
fn test_missing_config_file_fails() {
    Command::cargo_bin("aetherflow")
        .unwrap()
        .args(["--config", "/nonexistent/aetherflow.json", "templates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}
