use predicates::prelude::*;

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;
use common::{docstat, fixture};

#[test]
fn shows_help() {
    docstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("docstat"))
        .stdout(predicate::str::contains("--first-table-only"));
}

#[test]
fn requires_an_input() {
    docstat().assert().failure();
}

#[test]
fn processes_single_file() {
    docstat()
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL (1 documents)"))
        .stdout(predicate::str::contains("simple.json"));
}

#[test]
fn reads_standard_input() {
    docstat()
        .args(["--format", "csv", "-"])
        .write_stdin(r#"{"body":{"content":[{"content":"from stdin\n"}]}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("2,10,9,0,0,0,<stdin>"));
}

#[test]
fn missing_file_fails_but_reports_others() {
    docstat()
        .arg(fixture("simple.json"))
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("simple.json"))
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn strict_mode_prints_no_report() {
    docstat()
        .args(["--strict", "does-not-exist.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn first_table_only_without_table_is_reported() {
    docstat()
        .arg("--first-table-only")
        .arg(fixture("simple.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no table"));
}

#[test]
fn rejects_repeated_standard_input() {
    docstat()
        .args(["-", "-"])
        .write_stdin(r#"{"body":{"content":[]}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("standard input"));
}

#[test]
fn rejects_listings_in_csv() {
    docstat()
        .args(["--format", "csv", "--rows"])
        .arg(fixture("table.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format csv"));
}
