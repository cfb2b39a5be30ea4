use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("control-gallery")
}

#[test]
fn test_cli_lists_catalog_as_yaml() {
    cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("- id: text"))
        .stdout(predicate::str::contains("displayName: ProgressView"))
        .stdout(predicate::str::contains("id: colorPicker"));
}

#[test]
fn test_cli_list_has_every_entry() {
    let output = cmd()
        .args(["--list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<&str> = entries
        .as_array()
        .expect("catalog is a JSON array")
        .iter()
        .filter_map(|e| e["id"].as_str())
        .collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids.first(), Some(&"text"));
    assert_eq!(ids.last(), Some(&"colorPicker"));
}

#[test]
fn test_cli_renders_button_defaults() {
    cmd()
        .args(["--render", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type: panel"))
        .stdout(predicate::str::contains("title: Properties"))
        .stdout(predicate::str::contains("label: Tap me"));
}

#[test]
fn test_cli_renders_json() {
    let output = cmd()
        .args(["--render", "stepper", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let detail: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(detail["type"], "panel");
    assert_eq!(detail["descriptor"]["id"], "stepper");
    assert!(detail["view"]["settings"]["fields"].is_array());
}

#[test]
fn test_cli_unknown_component_fails() {
    cmd()
        .args(["--render", "carousel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown component id: carousel"));
}

#[test]
fn test_cli_actions_conflict() {
    cmd()
        .args(["--list", "--render", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_cli_platform_version() {
    cmd()
        .arg("--platform-version")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_cli_rejects_invalid_accent() {
    cmd()
        .args(["--list", "--accent", "nope-color"])
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_config_file() {
    cmd()
        .args(["--list", "--config", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_saves_config() {
    let path = std::env::temp_dir().join(format!("control-gallery-{}.toml", std::process::id()));

    cmd()
        .args(["--list", "--initial", "slider", "--save-config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved configuration to"));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("initial = \"slider\""));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_cli_generates_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("control-gallery"));
}
