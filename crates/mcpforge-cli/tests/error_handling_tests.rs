//! Tests for error handling, exit codes and suggestions.

mod common;

use common::Fixture;
use predicates::prelude::*;

#[test]
fn test_unknown_kind_exits_one_with_kind_list() {
    let fx = Fixture::new();
    fx.mcpforge()
        .args(["add", "widget", "thing", "--path"])
        .arg(fx.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown component kind 'widget'"))
        .stderr(predicate::str::contains("resource"))
        .stderr(predicate::str::contains("transport"));
}

#[test]
fn test_suffixed_name_is_rejected() {
    let fx = Fixture::new();
    fx.mcpforge()
        .args(["add", "tool", "my-tool", "--path"])
        .arg(fx.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid component name"));

    assert!(!fx.exists("src/tools/my-tool-tool.ts"));
}

#[test]
fn test_existing_component_exits_one() {
    let fx = Fixture::new();
    fx.mcpforge()
        .args(["add", "tool", "echo", "--path"])
        .arg(fx.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fx.read("src/tools/echo-tool.ts"), "export class EchoTool {}\n");
}

#[test]
fn test_add_outside_project_lists_issues() {
    let fx = Fixture::empty();
    fx.mcpforge()
        .args(["add", "tool", "ping", "--path"])
        .arg(fx.dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid MCP server project"))
        .stderr(predicate::str::contains("package.json not found"));
}

#[test]
fn test_missing_argument_exits_two() {
    Fixture::empty()
        .mcpforge()
        .args(["add", "tool"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_config_key_exits_three() {
    Fixture::empty()
        .mcpforge()
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("registry.anchor"));
}

#[test]
fn test_missing_config_file_exits_four() {
    let fx = Fixture::empty();
    fx.mcpforge()
        .arg("--config")
        .arg(fx.dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(4);
}

#[test]
fn test_invalid_config_value_exits_four() {
    let fx = Fixture::empty();
    let config = fx.dir.path().join("bad.toml");
    std::fs::write(&config, "[registry]\nstyle = \"sometimes\"\n").unwrap();

    fx.mcpforge()
        .arg("--config")
        .arg(&config)
        .args(["config", "list"])
        .assert()
        .code(4);
}
