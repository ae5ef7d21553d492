//! In-process tests for the `plotstyle` command line.

use std::fs;
use std::path::Path;

use clap::Parser;
use plotstyle_cli::{run, Cli};
use plotstyle_standards::DEFAULT_LICENSE_TEMPLATE;
use tempfile::TempDir;

struct Output {
    ok: bool,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str]) -> anyhow::Result<Output> {
    let cli = Cli::try_parse_from(std::iter::once("plotstyle").chain(args.iter().copied()))?;
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let ok = run(cli, &mut stdout, &mut stderr)?;
    Ok(Output {
        ok,
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// merge
// ============================================================================

#[test]
fn merge_finalizes_and_warns() {
    let dir = TempDir::new().unwrap();
    let base = write(dir.path(), "base.yaml", "facecolor: never\nlw: 1\n");
    let over = write(dir.path(), "over.json", r#"{"color": "yellow"}"#);

    let output = invoke(&["merge", &base, &over, "--format", "json"]).unwrap();
    assert!(output.ok);
    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"facecolor": "none", "edgecolor": "yellow", "linewidth": 1})
    );
    assert!(output.stderr.contains("defined as \"never\""));
}

#[test]
fn merge_without_finalize_keeps_sentinel() {
    let dir = TempDir::new().unwrap();
    let base = write(dir.path(), "base.yml", "fc: never\n");

    let output = invoke(&["merge", &base, "--no-finalize"]).unwrap();
    assert_eq!(output.stdout.trim(), "facecolor: never");
    assert!(output.stderr.is_empty());
}

#[test]
fn merge_strict_fails_on_diagnostics() {
    let dir = TempDir::new().unwrap();
    let sheet = write(dir.path(), "layers.yaml", "- fc: never\n- fc: red\n");

    let output = invoke(&["merge", &sheet, "--strict"]).unwrap();
    assert!(!output.ok);
}

#[test]
fn merge_reports_bad_stylesheet() {
    let dir = TempDir::new().unwrap();
    let sheet = write(dir.path(), "bad.yaml", "fc: [1, 2]\n");

    let err = invoke(&["merge", &sheet]).err().unwrap();
    assert!(format!("{:#}", err).contains("bad.yaml"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_lists_failures() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "plotstyle-standards.yaml",
        "license:\n  template: \"// Copyright Example\"\n",
    );
    write(dir.path(), "src/lib.rs", "// Copyright Example\n");
    write(dir.path(), "src/bad.rs", "fn main() {}\n");
    let root = dir.path().to_string_lossy().into_owned();

    // No .git directory: falls back to walking the tree.
    let output = invoke(&["check", "--root", &root]).unwrap();
    assert!(!output.ok);
    assert_eq!(output.stdout, "license-header: src/bad.rs\n");
    assert!(output.stderr.contains("1 of 2 files failed"));
}

#[test]
fn check_without_config_uses_default_conventions() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/lib.rs", "pub fn x() {}\n");
    write(
        dir.path(),
        "src/ok.rs",
        &format!("{}\npub fn y() {{}}\n", DEFAULT_LICENSE_TEMPLATE),
    );
    let root = dir.path().to_string_lossy().into_owned();

    let output = invoke(&["check", "--root", &root, "--walk"]).unwrap();
    assert!(!output.ok);
    assert_eq!(
        output.stdout,
        "import-convention: src/lib.rs\nlicense-header: src/lib.rs\n"
    );
    assert!(output.stderr.contains("1 of 2 files failed"));
}

#[test]
fn check_rejects_config_without_checks() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "empty.yaml", "discovery: walk\n");
    let root = dir.path().to_string_lossy().into_owned();

    let err = invoke(&["check", "--root", &root, "--config", &config])
        .err()
        .unwrap();
    assert!(err.to_string().contains("enables no checks"));
}

#[test]
fn check_with_explicit_config_passes() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "conf/standards.yaml",
        "imports:\n  pattern: '^use std::fmt;$'\n",
    );
    write(dir.path(), "src/lib.rs", "use std::fmt;\n");
    let root = dir.path().to_string_lossy().into_owned();

    let output = invoke(&["check", "--root", &root, "--config", &config, "--walk"]).unwrap();
    assert!(output.ok);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("1 files ok"));
}
