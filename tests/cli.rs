//! End-to-end tests that drive the `pattern-pages` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn run(source: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_pattern-pages");
    Command::new(bin)
        .arg("--source")
        .arg(source)
        .args(args)
        .output()
        .expect("failed to run pattern-pages")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

fn empty_source() -> TempDir {
    TempDir::new().unwrap()
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_strategy_in_text() {
    let tmp = empty_source();
    let out = run(tmp.path(), &["show", "strategy"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.starts_with("Strategy Design Pattern | Behavioral\n"));
    let summary = text.find("The strategy design pattern").unwrap();
    let code = text.find("class ConcreteStrategyA(Strategy):").unwrap();
    assert!(summary < code);
    assert!(stderr(&out).is_empty());
}

#[test]
fn show_unknown_id_falls_back_to_landing() {
    let tmp = empty_source();
    let out = run(tmp.path(), &["show", "nonexistent-id"]);
    assert!(out.status.success(), "unknown id must not fail");
    assert!(stdout(&out).starts_with("ChatGPT | Software Design Patterns\n"));
    assert!(stderr(&out).contains("'nonexistent-id' not found"));
}

#[test]
fn show_html_is_a_document() {
    let tmp = empty_source();
    let out = run(tmp.path(), &["show", "observer", "--format", "html"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let html = stdout(&out);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Observer Design Pattern | Behavioral</title>"));
}

#[test]
fn show_content_page() {
    let tmp = empty_source();
    std::fs::write(
        tmp.path().join("010-singleton.toml"),
        "title = \"Singleton\"\nsummary = \"One instance.\"\ncode = \"\"\"\nclass Singleton:\n    _instance = None\n\"\"\"\n",
    )
    .unwrap();

    let out = run(tmp.path(), &["show", "singleton"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("```python\nclass Singleton:\n    _instance = None\n```"));
}

// ---------------------------------------------------------------------------
// list / check
// ---------------------------------------------------------------------------

#[test]
fn list_json_in_navigation_order() {
    let tmp = empty_source();
    let out = run(tmp.path(), &["list", "--json"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let entries: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let ids: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["bridge", "command", "observer", "strategy", "adapter", "factory", "extras"]
    );
}

#[test]
fn duplicate_content_id_fails_startup() {
    let tmp = empty_source();
    std::fs::write(
        tmp.path().join("010-bridge.toml"),
        "title = \"Bridge again\"\nsummary = \"S\"\ncode = \"x\"\n",
    )
    .unwrap();

    let out = run(tmp.path(), &["check"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("bridge"));
}

#[test]
fn check_reports_config() {
    let tmp = empty_source();
    std::fs::write(
        tmp.path().join("config.toml"),
        "[site]\ntitle = \"My Patterns\"\n",
    )
    .unwrap();

    let out = run(tmp.path(), &["check"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("    config.toml"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn invalid_config_fails() {
    let tmp = empty_source();
    std::fs::write(tmp.path().join("config.toml"), "unknown_key = 1\n").unwrap();
    let out = run(tmp.path(), &["check"]);
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// build / gen-config
// ---------------------------------------------------------------------------

#[test]
fn build_writes_site() {
    let tmp = empty_source();
    let assets = tmp.path().join("assets");
    std::fs::create_dir(&assets).unwrap();
    std::fs::write(assets.join("favicon.ico"), b"icon").unwrap();
    let dist = tmp.path().join("dist");

    let out = run(tmp.path(), &["build", "--output", dist.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));

    for file in ["index.html", "bridge.html", "extras.html", "favicon.ico"] {
        assert!(dist.join(file).is_file(), "{file} missing");
    }
    assert!(stdout(&out).contains("Generated 7 pages, 1 asset"));
}

#[test]
fn gen_config_round_trips() {
    let tmp = empty_source();
    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    std::fs::write(tmp.path().join("config.toml"), stdout(&out)).unwrap();

    let check = run(tmp.path(), &["check"]);
    assert!(check.status.success(), "{}", stderr(&check));
}
