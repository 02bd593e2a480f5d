// tests/common/mod.rs
//! Shared helpers for the CLI test suites.

use assert_cmd::Command;
use std::path::PathBuf;

#[must_use]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[must_use]
pub fn docstat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docstat"))
}

/// Runs the binary with `--format json` on the named fixtures and parses
/// the report array.
#[must_use]
pub fn json_report(flags: &[&str], fixtures: &[&str]) -> serde_json::Value {
    let output = docstat()
        .args(["--format", "json"])
        .args(flags)
        .args(fixtures.iter().map(|name| fixture(name)))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("report is valid JSON")
}
