// tests/integration/end_to_end.rs
#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;
use common::json_report;

#[test]
fn simple_document_metrics() {
    let report = json_report(&[], &["simple.json"]);
    let doc = &report[0];

    assert_eq!(doc["raw_content"], "Hello world\nSee the docs and the blog.\n\n");
    assert_eq!(doc["plain_text"], "Hello worldSee the docs and the blog.");
    assert_eq!(doc["word_count"], 8);
    assert_eq!(doc["total_characters"], 38);
    assert_eq!(doc["characters_without_spaces"], 32);
    assert_eq!(doc["image_count"], 1);
    assert_eq!(doc["emoji_count"], 0);
    assert_eq!(
        doc["urls"],
        serde_json::json!(["https://example.com/docs", "https://example.com/blog"])
    );
}

#[test]
fn whole_body_includes_table_text() {
    let report = json_report(&[], &["table.json"]);
    let doc = &report[0];

    assert_eq!(doc["word_count"], 11);
    assert_eq!(doc["total_characters"], 61);
    assert_eq!(doc["characters_without_spaces"], 55);
    assert_eq!(doc["image_count"], 2);
    assert_eq!(doc["table_count"], 1);
}

#[test]
fn first_table_only_narrows_text_but_not_images() {
    let report = json_report(&["--first-table-only"], &["table.json"]);
    let doc = &report[0];

    assert_eq!(
        doc["word_list"],
        serde_json::json!(["Article", "body", "read", "more"])
    );
    assert_eq!(doc["image_count"], 2);
    assert_eq!(doc["total_characters"], 21 + 2);
    assert_eq!(doc["characters_without_spaces"], 19 + 2);
    assert_eq!(doc["urls"], serde_json::json!(["https://example.com/more"]));
}

#[test]
fn emoji_counting_is_opt_in() {
    let plain = json_report(&[], &["emoji.json"]);
    assert_eq!(plain[0]["emoji_count"], 0);
    assert_eq!(plain[0]["total_characters"], 13);

    let counted = json_report(&["--emoji"], &["emoji.json"]);
    assert_eq!(counted[0]["emoji_count"], 2);
    assert_eq!(counted[0]["total_characters"], 15);
    assert_eq!(counted[0]["characters_without_spaces"], 13);
}

#[test]
fn rows_are_listed_on_request() {
    let report = json_report(&["--rows"], &["table.json"]);
    assert_eq!(
        report[0]["rows"],
        serde_json::json!(["Field\nValue\n", "Article body\nread more\n"])
    );
}

#[test]
fn batch_keeps_argument_order() {
    let report = json_report(&[], &["table.json", "simple.json", "emoji.json"]);
    let words: Vec<_> = report
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["word_count"].as_u64().unwrap())
        .collect();
    assert_eq!(words, [11, 8, 3]);
}
