//! Integration tests for the tscfg binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_request(dir: &TempDir, name: &str, request: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(request).unwrap()).unwrap();
    path
}

fn demo_request() -> serde_json::Value {
    serde_json::json!({
        "context": {
            "target": "//app:demo",
            "bin_dir": "bazel-bin",
            "gen_files_dir": "bazel-genfiles",
            "runtime_kind": "browser"
        },
        "files": {
            "all_inputs": ["app/x.ts", "lib/y.d.ts"],
            "direct_sources": ["app/x.ts"],
            "allowed_dependencies": ["lib/y.d.ts"]
        },
        "output_targets": {
            "config_path": "a/b/tsconfig.json"
        }
    })
}

#[test]
fn test_synthesize_prints_document() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "request.json", &demo_request());

    Command::cargo_bin("tscfg")
        .unwrap()
        .arg("synthesize")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""rootDir": "../..""#))
        .stdout(predicate::str::contains(r#""target": "//app:demo""#))
        .stdout(predicate::str::contains(r#""compileOnSave": false"#));
}

#[test]
fn test_synthesize_writes_out_file() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "request.json", &demo_request());
    let out = dir.path().join("tsconfig.json");

    Command::cargo_bin("tscfg")
        .unwrap()
        .arg("synthesize")
        .arg(&request)
        .arg("--out")
        .arg(&out)
        .arg("--compact")
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(document["compilerOptions"]["moduleResolution"], "node");
    // browser load: helpers come from the module loader
    assert_eq!(document["compilerOptions"]["noEmitHelpers"], true);
    assert_eq!(document["bazelOptions"]["moduleSubstitution"], true);
    assert_eq!(document["files"][0], "../../app/x.ts");
}

#[test]
fn test_validate_accepts_good_request() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "request.json", &demo_request());

    Command::cargo_bin("tscfg")
        .unwrap()
        .arg("validate")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: //app:demo"));
}

#[test]
fn test_validate_rejects_untracked_sources() {
    let dir = TempDir::new().unwrap();
    let mut bad = demo_request();
    bad["files"]["direct_sources"] = serde_json::json!(["app/untracked.ts"]);
    let request = write_request(&dir, "request.json", &bad);

    Command::cargo_bin("tscfg")
        .unwrap()
        .arg("validate")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_malformed_request_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, "{not json").unwrap();

    Command::cargo_bin("tscfg")
        .unwrap()
        .arg("synthesize")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed synthesis request"));
}
