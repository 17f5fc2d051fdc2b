//! End-to-end tests for the `prism` binary against the built-in catalog.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHAT_INPUT_URL: &str = "https://www.prismui.tech/r/styles/default/chat-input.json";

/// A `prism` invocation that cannot see the developer's own config.
fn prism(sandbox: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("prism");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("PRISM_REGISTRY_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn sandbox() -> TempDir {
    TempDir::new().unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_mentions_prismui() {
    let sb = sandbox();
    prism(&sb)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PrismUI"));
}

#[test]
fn version_flag() {
    let sb = sandbox();
    prism(&sb)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_name_the_binary() {
    let sb = sandbox();
    prism(&sb)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prism"));
}

#[test]
fn no_color_env_accepts_common_values() {
    let sb = sandbox();
    for value in ["1", "true", "yes", "0"] {
        prism(&sb)
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chat-input"));
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_components_in_declaration_order() {
    let sb = sandbox();
    prism(&sb)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("expandable-card\nchat-input\n");
}

#[test]
fn list_examples_by_subcategory() {
    let sb = sandbox();
    prism(&sb)
        .args([
            "list",
            "--kind",
            "example",
            "--category",
            "examples",
            "--subcategory",
            "demo",
            "--format",
            "list",
        ])
        .assert()
        .success()
        .stdout("expandable-card-demo\nchat-input-demo\n");
}

#[test]
fn list_unknown_category_is_empty_not_an_error() {
    let sb = sandbox();
    prism(&sb)
        .args(["list", "--category", "widgets", "--format", "list"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn list_json_carries_full_entries() {
    let sb = sandbox();
    let out = prism(&sb)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "expandable-card");
    assert_eq!(entries[0]["kind"], "component");
    assert_eq!(entries[1]["cli"]["bun"], format!("bunx shadcn@latest add \"{CHAT_INPUT_URL}\""));
}

#[test]
fn list_csv_has_header() {
    let sb = sandbox();
    prism(&sb)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,category,subcategory,description\n"))
        .stdout(predicate::str::contains("chat-input,components,form,"));
}

// ── show / install ────────────────────────────────────────────────────────────

#[test]
fn show_component_lists_its_examples() {
    let sb = sandbox();
    prism(&sb)
        .args(["show", "chat-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chat-input-basic"))
        .stdout(predicate::str::contains("chat-input-demo"))
        .stdout(predicate::str::contains("lucide-react (npm package)"));
}

#[test]
fn show_json_is_the_docs_page() {
    let sb = sandbox();
    let out = prism(&sb)
        .args(["show", "chat-input", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let page: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(page["title"], "Chat Input");
    assert_eq!(page["href"], "/docs/components/chat-input");
    assert_eq!(page["examples"].as_array().unwrap().len(), 2);
    assert_eq!(page["install"].as_array().unwrap().len(), 4);
}

#[test]
fn show_example_source() {
    let sb = sandbox();
    prism(&sb)
        .args(["show", "chat-input-demo", "--kind", "example", "--source"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"use client\";"));
}

#[test]
fn install_prints_exact_npm_command() {
    let sb = sandbox();
    prism(&sb)
        .args(["install", "chat-input"])
        .assert()
        .success()
        .stdout(format!("npx shadcn@latest add \"{CHAT_INPUT_URL}\"\n"));
}

#[test]
fn install_with_pnpm() {
    let sb = sandbox();
    prism(&sb)
        .args(["install", "chat-input", "--pm", "pnpm"])
        .assert()
        .success()
        .stdout(format!("pnpm dlx shadcn@latest add \"{CHAT_INPUT_URL}\"\n"));
}

#[test]
fn install_all_lists_four_managers() {
    let sb = sandbox();
    prism(&sb)
        .args(["install", "expandable-card", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npx shadcn@latest add"))
        .stdout(predicate::str::contains("pnpm dlx shadcn@latest add"))
        .stdout(predicate::str::contains("yarn dlx shadcn@latest add"))
        .stdout(predicate::str::contains("bunx shadcn@latest add"));
}

// ── validate / docs ───────────────────────────────────────────────────────────

#[test]
fn builtin_catalog_validates() {
    let sb = sandbox();
    prism(&sb)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is consistent: 2 components, 4 examples"));
}

#[test]
fn validate_json_is_empty_array() {
    let sb = sandbox();
    prism(&sb)
        .args(["validate", "--output-format", "json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn sidebar_marks_new_components() {
    let sb = sandbox();
    prism(&sb)
        .arg("sidebar")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Getting Started\n"))
        .stdout(predicate::str::contains(
            "Chat Input  /docs/components/chat-input [new]",
        ));
}

#[test]
fn sitemap_uses_base_url() {
    let sb = sandbox();
    prism(&sb)
        .args(["sitemap", "--base-url", "http://localhost:3000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("http://localhost:3000\t"))
        .stdout(predicate::str::contains(
            "http://localhost:3000/docs/components/expandable-card\t",
        ));
}

#[test]
fn sitemap_xml_document() {
    let sb = sandbox();
    prism(&sb)
        .args(["sitemap", "--xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<urlset"))
        .stdout(predicate::str::contains(
            "<loc>https://www.prismui.tech/docs/components/chat-input</loc>",
        ));
}

// ── build ─────────────────────────────────────────────────────────────────────

#[test]
fn build_writes_registry_items() {
    let sb = sandbox();
    prism(&sb)
        .args(["build", "--out", "public/r"])
        .assert()
        .success();

    let item = fs::read_to_string(sb.path().join("public/r/chat-input.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&item).unwrap();
    assert_eq!(json["name"], "chat-input");
    assert_eq!(json["type"], "registry:ui");
    assert_eq!(json["dependencies"][0], "lucide-react");
    assert!(sb.path().join("public/r/expandable-card.json").is_file());
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_file_sets_default_package_manager() {
    let sb = sandbox();
    let path = sb.path().join("prism.toml");
    fs::write(&path, "").unwrap();

    prism(&sb)
        .args(["--config", path.to_str().unwrap()])
        .args(["config", "set", "install.package_manager", "bun"])
        .assert()
        .success();

    prism(&sb)
        .args(["--config", path.to_str().unwrap(), "install", "chat-input"])
        .assert()
        .success()
        .stdout(format!("bunx shadcn@latest add \"{CHAT_INPUT_URL}\"\n"));

    prism(&sb)
        .args(["--config", path.to_str().unwrap()])
        .args(["config", "get", "install.package_manager"])
        .assert()
        .success()
        .stdout("bun\n");
}

#[test]
fn environment_overrides_config() {
    let sb = sandbox();
    prism(&sb)
        .env("PRISM_INSTALL__PACKAGE_MANAGER", "yarn")
        .args(["install", "chat-input"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yarn dlx shadcn@latest add"));
}

#[test]
fn init_local_writes_default_config() {
    let sb = sandbox();
    prism(&sb).args(["init", "--local"]).assert().success();

    let written = fs::read_to_string(sb.path().join(".prism.toml")).unwrap();
    assert!(written.contains("package_manager = \"npm\""));

    // The local file is picked up without --config.
    prism(&sb)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".prism.toml\n");
}
