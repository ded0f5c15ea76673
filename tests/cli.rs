//! Tests that drive the built `genqr` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn genqr(archive: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genqr"));
    cmd.env_remove("RUST_LOG")
        .env_remove("GENQR_MODULE_SIZE")
        .env("GENQR_ARCHIVE_DIR", archive.path());
    cmd
}

#[test]
fn prints_summary_and_writes_artifacts() {
    let archive = TempDir::new().unwrap();
    let out = genqr(&archive)
        .args(["--content", "paul@example.com", "--label", "Paul"])
        .output()
        .expect("binary runs");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("QR CODE GENERATED!"));
    assert!(stdout.contains("  Label:   Paul"));
    assert!(stdout.contains("  Type:    email"));
    assert!(stdout.contains("  Content: mailto:paul@example.com"));

    let names: Vec<_> = fs::read_dir(archive.path()).unwrap().collect();
    assert_eq!(names.len(), 2);
}

#[test]
fn json_output() {
    let archive = TempDir::new().unwrap();
    let out = genqr(&archive)
        .args(["--content", "www.example.com", "--json"])
        .output()
        .expect("binary runs");

    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["content_type"], "url");
    assert_eq!(v["encoded_content"], "https://www.example.com");
    assert!(std::path::Path::new(v["png_path"].as_str().unwrap()).is_file());
}

#[test]
fn empty_content_fails_without_artifacts() {
    let archive = TempDir::new().unwrap();
    let out = genqr(&archive)
        .args(["--content", ""])
        .output()
        .expect("binary runs");

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty"));
    assert_eq!(fs::read_dir(archive.path()).unwrap().count(), 0);
}

#[test]
fn unknown_type_is_rejected_by_parser() {
    let archive = TempDir::new().unwrap();
    let out = genqr(&archive)
        .args(["--content", "x", "--type", "fax"])
        .output()
        .expect("binary runs");
    assert!(!out.status.success());
}
