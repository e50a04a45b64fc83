//! CLI integration tests
//!
//! Exercise the binary against a throwaway app data layout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn cachesweep() -> Command {
    Command::cargo_bin("cachesweep").unwrap()
}

/// Lay out a populated app data root under `dir`.
fn populate_data_dir(dir: &Path) {
    for sub in ["cache", "code_cache", "databases", "shared_prefs", "files"] {
        std::fs::create_dir_all(dir.join(sub)).unwrap();
    }
    std::fs::write(dir.join("cache/page.bin"), vec![0u8; 64]).unwrap();
    std::fs::write(dir.join("databases/app.db"), b"database").unwrap();
    std::fs::write(dir.join("databases/app.db-journal"), b"jr").unwrap();
    std::fs::write(dir.join("shared_prefs/settings.xml"), b"<map/>").unwrap();
}

#[test]
fn test_help() {
    cachesweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear and measure app cache regions"));
}

#[test]
fn test_version() {
    cachesweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cachesweep"));
}

#[test]
fn test_clear_help_lists_region_flags() {
    cachesweep()
        .args(["clear", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--webview"))
        .stdout(predicate::str::contains("--databases"))
        .stdout(predicate::str::contains("--preferences"))
        .stdout(predicate::str::contains("--confirm"));
}

#[test]
fn test_scan_reports_totals() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["scan", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal Cache"))
        .stdout(predicate::str::contains("Total reclaimable"));
}

#[test]
fn test_clear_without_confirm_is_dry_run() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["clear", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(tmp.path().join("cache/page.bin").exists());
}

#[test]
fn test_clear_confirm_deletes_caches_and_preserves_persistence() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["clear", "--confirm", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared!"));

    assert!(!tmp.path().join("cache/page.bin").exists());
    assert!(tmp.path().join("cache").exists());
    assert!(tmp.path().join("databases/app.db").exists());
    assert!(tmp.path().join("shared_prefs/settings.xml").exists());
}

#[test]
fn test_clear_selective_databases() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["clear", "--databases", "--confirm", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(!tmp.path().join("databases/app.db").exists());
    assert!(!tmp.path().join("databases/app.db-journal").exists());
    assert!(tmp.path().join("cache/page.bin").exists());
    assert!(tmp.path().join("shared_prefs/settings.xml").exists());
}

#[test]
fn test_info_json_uses_wire_keys() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["info", "--json", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("internalCacheSize"))
        .stdout(predicate::str::contains("externalCacheSize"))
        .stdout(predicate::str::contains("totalCacheSize"));
}

#[test]
fn test_exec_get_cache_info() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["exec", "getCacheInfo", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("internalCacheSize"));
}

#[test]
fn test_exec_clear_cache_message() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["exec", "clearCache", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cache cleared successfully (databases and preferences preserved)",
        ));

    assert!(tmp.path().join("databases/app.db").exists());
}

#[test]
fn test_exec_selective_with_options() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["exec", "clearCacheSelective", r#"{"preferences": true}"#, "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected cache cleared successfully"));

    assert!(!tmp.path().join("shared_prefs").exists());
    assert!(tmp.path().join("cache/page.bin").exists());
}

#[test]
fn test_exec_unknown_action_fails() {
    let tmp = TempDir::new().unwrap();
    populate_data_dir(tmp.path());

    cachesweep()
        .args(["exec", "defragment", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported action"));
}

#[test]
fn test_invalid_command() {
    cachesweep()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
