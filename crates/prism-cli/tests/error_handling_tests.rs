//! Exit codes, messages and suggestions for failing invocations.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

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

/// A manifest directory under `sandbox/registry` built from `(path, body)`
/// pairs.
fn registry(sandbox: &TempDir, files: &[(&str, &str)]) -> String {
    let root = sandbox.path().join("registry");
    for (rel, body) in files {
        let full = root.join(rel);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, body).unwrap();
    }
    root.display().to_string()
}

const ORPHAN: &str = r#"
[[example]]
name = "orphan-demo"
category = "examples"
subcategory = "demo"
source = "orphan-demo.tsx"
dependencies = ["@/components/prismui/missing-thing"]
"#;

const DUPLICATED: &str = r#"
[[component]]
name = "plain-card"
category = "components"
source = "plain-card.tsx"
registry_url = "https://x.test/plain-card.json"
files = [{ path = "components/prismui/plain-card.tsx", type = "registry:ui" }]

[[component]]
name = "plain-card"
category = "components"
source = "plain-card.tsx"
registry_url = "https://x.test/plain-card.json"
files = [{ path = "components/prismui/plain-card.tsx", type = "registry:ui" }]
"#;

// ── usage errors (2) ──────────────────────────────────────────────────────────

#[test]
fn unknown_subcommand_exits_two() {
    let sb = TempDir::new().unwrap();
    prism(&sb).arg("frobnicate").assert().code(2);
}

#[test]
fn no_arguments_prints_help_and_exits_two() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn subcategory_without_category_exits_two() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["list", "--subcategory", "form"])
        .assert()
        .code(2);
}

#[test]
fn build_into_a_file_exits_two() {
    let sb = TempDir::new().unwrap();
    fs::write(sb.path().join("taken"), "").unwrap();
    prism(&sb)
        .args(["build", "--out", "taken"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected a directory"));
}

// ── not found (3) ─────────────────────────────────────────────────────────────

#[test]
fn unknown_component_exits_three() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["show", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "No component named 'does-not-exist'",
        ))
        .stderr(predicate::str::contains("prism list --kind component"));
}

#[test]
fn near_miss_suggests_the_real_name() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["install", "chat"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Did you mean: chat-input?"));
}

#[test]
fn example_names_are_not_components() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["show", "chat-input-demo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--kind example"));
}

// ── configuration (4) ─────────────────────────────────────────────────────────

#[test]
fn missing_registry_dir_exits_four() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["list", "--registry-dir", "nowhere"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("registry directory not found"));
}

#[test]
fn malformed_manifest_exits_four() {
    let sb = TempDir::new().unwrap();
    let dir = registry(&sb, &[("broken.toml", "[[component]\nname = ")]);
    prism(&sb)
        .args(["validate", "--registry-dir", &dir])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn explicit_missing_config_exits_four() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_exits_four() {
    let sb = TempDir::new().unwrap();
    prism(&sb)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.lang"));
}

// ── integrity (5) ─────────────────────────────────────────────────────────────

#[test]
fn dangling_reference_exits_five() {
    let sb = TempDir::new().unwrap();
    let dir = registry(
        &sb,
        &[
            ("orphan.toml", ORPHAN),
            ("orphan-demo.tsx", "export default function Demo() {}"),
        ],
    );
    prism(&sb)
        .args(["validate", "--registry-dir", &dir])
        .assert()
        .code(5)
        .stdout(predicate::str::contains(
            "example 'orphan-demo' depends on '@/components/prismui/missing-thing'",
        ))
        .stderr(predicate::str::contains("1 integrity issue"));
}

#[test]
fn registry_dir_env_var_is_honoured() {
    let sb = TempDir::new().unwrap();
    let dir = registry(
        &sb,
        &[
            ("orphan.toml", ORPHAN),
            ("orphan-demo.tsx", "export default function Demo() {}"),
        ],
    );
    prism(&sb)
        .env("PRISM_REGISTRY_DIR", &dir)
        .arg("validate")
        .assert()
        .code(5);
}

#[test]
fn strict_build_refuses_duplicates_and_writes_nothing() {
    let sb = TempDir::new().unwrap();
    let dir = registry(
        &sb,
        &[
            ("cards.toml", DUPLICATED),
            ("plain-card.tsx", "export function PlainCard() {}"),
        ],
    );
    prism(&sb)
        .args(["build", "--strict", "--out", "out", "--registry-dir", &dir])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("declared more than once"));
    assert!(!sb.path().join("out").exists());
}

#[test]
fn lenient_build_warns_and_writes_first_duplicate() {
    let sb = TempDir::new().unwrap();
    let dir = registry(
        &sb,
        &[
            ("cards.toml", DUPLICATED),
            ("plain-card.tsx", "export function PlainCard() {}"),
        ],
    );
    prism(&sb)
        .args(["build", "--out", "out", "--registry-dir", &dir])
        .assert()
        .success();
    assert!(sb.path().join("out/plain-card.json").is_file());
}

#[test]
fn strict_config_applies_to_build_but_not_to_reads() {
    let sb = TempDir::new().unwrap();
    let dir = registry(
        &sb,
        &[
            ("cards.toml", DUPLICATED),
            ("plain-card.tsx", "export function PlainCard() {}"),
        ],
    );
    prism(&sb)
        .env("PRISM_REGISTRY__STRICT", "true")
        .args(["list", "--format", "list", "--registry-dir", &dir])
        .assert()
        .success()
        .stdout("plain-card\nplain-card\n");
    prism(&sb)
        .env("PRISM_REGISTRY__STRICT", "true")
        .args(["build", "--out", "out", "--registry-dir", &dir])
        .assert()
        .code(5);
    assert!(!sb.path().join("out").exists());
}
