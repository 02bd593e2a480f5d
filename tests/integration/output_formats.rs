// tests/integration/output_formats.rs
use predicates::prelude::*;
use std::fs;

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;
use common::{docstat, fixture};

#[test]
fn jsonl_has_document_and_total_lines() {
    let output = docstat()
        .args(["--format", "jsonl"])
        .arg(fixture("simple.json"))
        .arg(fixture("emoji.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["type"], "document");
    assert_eq!(lines[2]["type"], "total");
    assert_eq!(lines[2]["documents"], 2);
    assert_eq!(lines[2]["words"], 11);
}

#[test]
fn markdown_table() {
    docstat()
        .args(["--format", "md", "--urls"])
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("### Document Statistics"))
        .stdout(predicate::str::contains("| 8 | 38 | 32 | 1 | 0 | 2 |"))
        .stdout(predicate::str::contains("- <https://example.com/blog>"));
}

#[test]
fn markdown_row_listing() {
    docstat()
        .args(["--format", "md", "--rows"])
        .arg(fixture("table.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("### Table Rows"))
        .stdout(predicate::str::contains("1. Field Value"))
        .stdout(predicate::str::contains("1. Article body read more"));
}

#[test]
fn yaml_output() {
    docstat()
        .args(["--format", "yaml"])
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("word_count: 8"));
}

#[test]
fn tsv_output() {
    docstat()
        .args(["--format", "tsv"])
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("words\tchars\t"))
        .stdout(predicate::str::contains("8\t38\t32\t1\t0\t2\t"));
}

#[test]
fn table_listings() {
    docstat()
        .args(["--words", "--urls"])
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "words: Hello world See the docs and the blog",
        ))
        .stdout(predicate::str::contains("url: https://example.com/docs"));
}

#[test]
fn writes_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.json");
    docstat()
        .args(["--format", "json", "--output"])
        .arg(&target)
        .arg(fixture("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written[0]["word_count"], 8);
}
