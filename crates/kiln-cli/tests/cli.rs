//! Integration tests for the kiln binary against the demo project.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn demo_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/basic")
}

fn kiln() -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn resolve_json(profile: &str) -> Value {
    let output = kiln()
        .args(["--quiet", "resolve", "--profile", profile, "--cwd"])
        .arg(demo_dir())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn resolve_development_demo() {
    let config = resolve_json("development");
    assert_eq!(config["mode"], "development");
    assert_eq!(config["devtool"], "cheap-module-source-map");
    assert_eq!(config["devServer"]["port"], 3000);
    assert!(config["output"]["path"].is_null());
    assert_eq!(config["optimization"]["minimize"], false);
    assert_eq!(config["optimization"]["minimizer"], serde_json::json!([]));

    let rules = config["module"]["rules"][0]["oneOf"].as_array().unwrap();
    assert_eq!(rules[0]["use"][0]["loader"], "style-loader");
    assert_eq!(rules[6]["exclude"], "node_modules");
}

#[test]
fn resolve_production_demo() {
    let config = resolve_json("production");
    assert_eq!(config["mode"], "production");
    assert!(config.get("devServer").is_none());
    assert!(config["output"]["path"].as_str().unwrap().ends_with("dist"));
    assert_eq!(config["optimization"]["splitChunks"]["chunks"], "all");

    let plugins: Vec<_> = config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|plugin| plugin["plugin"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(plugins, vec!["lint", "html", "css-extract", "preload"]);
}

#[test]
fn resolve_compact_is_single_line() {
    kiln()
        .args(["-q", "resolve", "--compact", "--cwd"])
        .arg(demo_dir())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"mode\":\"development\""))
        .stdout(predicate::str::contains('\n').count(1));
}

#[test]
fn resolve_fails_without_entry() {
    let dir = TempDir::new().unwrap();
    kiln()
        .args(["resolve", "--cwd"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry path not found"));
}

#[test]
fn resolve_skip_checks_works_on_empty_project() {
    let dir = TempDir::new().unwrap();
    kiln()
        .args(["-q", "resolve", "--skip-checks", "--profile", "prod", "--cwd"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""));
}

#[test]
fn check_demo_passes() {
    kiln()
        .args(["check", "--profile", "production", "--cwd"])
        .arg(demo_dir())
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed!"));
}

#[test]
fn check_reports_missing_template() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.js"), "").unwrap();

    kiln()
        .args(["check", "--cwd"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("html template path not found"));
}

#[test]
fn classify_paths() {
    kiln()
        .args(["-q", "classify", "--profile", "production", "--cwd"])
        .arg(demo_dir())
        .args(["src/sass/index.sass", "src/imgs/logo.png", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "src/sass/index.sass: sass (sass-loader → postcss-loader → css-loader → mini-css-extract-plugin/loader)",
        ))
        .stdout(predicate::str::contains("src/imgs/logo.png: image (inline below threshold)"))
        .stdout(predicate::str::contains("README.md: unhandled"));
}

#[test]
fn asset_decisions_use_file_size() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("small.png"), vec![0u8; 8 * 1024]).unwrap();
    fs::write(dir.path().join("large.png"), vec![0u8; 12 * 1024]).unwrap();
    fs::write(dir.path().join("tiny.woff2"), vec![0u8; 16]).unwrap();

    kiln()
        .args(["-q", "asset", "--profile", "production", "--cwd"])
        .arg(dir.path())
        .args(["small.png", "large.png", "tiny.woff2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("small.png: inline (image, 8.00 KB)"))
        .stdout(predicate::str::contains("large.png: emit (image, 12.00 KB)"))
        .stdout(predicate::str::contains("tiny.woff2: emit (media, 16 B)"));
}

#[test]
fn asset_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    kiln()
        .args(["asset", "--cwd"])
        .arg(dir.path())
        .arg("missing.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn settings_file_and_env_apply() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kiln.toml"),
        "output_dir = \"build\"\n[dev]\nport = 8080\n",
    )
    .unwrap();

    let output = kiln()
        .env("KILN_DEV__PORT", "9090")
        .args(["-q", "resolve", "--skip-checks", "--cwd"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["devServer"]["port"], 9090);
}

#[test]
fn invalid_settings_are_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), "parallel_jobs = 0\n").unwrap();

    kiln()
        .args(["resolve", "--skip-checks", "--cwd"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parallel_jobs"));
}

#[test]
fn schema_describes_settings() {
    let output = kiln().args(["schema", "--compact"]).output().unwrap();
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"]["entry"].is_object());
    assert!(schema["properties"]["assets"].is_object());
}
