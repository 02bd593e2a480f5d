// crates/core/src/analyzer.rs
use serde_json::Value;
use tracing::{debug, trace};

use crate::collect::KeyedSearch;
use crate::content::{ExtractedContent, Parts};
use crate::error::{AnalyzeError, Result};
use crate::node::{collection_len, lookup};
use crate::options::AnalyzerOptions;
use crate::{emoji, extract, tokenize};

const BODY_CONTENT: &[&str] = &["body", "content"];
const INLINE_OBJECTS: &str = "inlineObjects";
const TABLE_ROWS: &str = "tableRows";
/// Row analyzed in first-table mode; row 0 is the table header.
const FIRST_TABLE_ROW: usize = 1;

/// Runs every extraction pass over a document tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    #[must_use]
    pub const fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Analyzes `tree`.
    ///
    /// By default text, words and URLs come from `body.content` and images are
    /// the entries of `inlineObjects`. In first-table mode text, words and URLs
    /// come from the second row of the first table, while images are the
    /// `inlineObjectElement`s of the whole `body.content`.
    ///
    /// # Errors
    /// - [`AnalyzeError::DepthExceeded`] if the tree nests deeper than
    ///   `max_depth`.
    /// - [`AnalyzeError::NoTable`], [`AnalyzeError::MissingRows`] or
    ///   [`AnalyzeError::RowOutOfRange`] in first-table mode when the row
    ///   cannot be found.
    pub fn analyze(&self, tree: &Value) -> Result<ExtractedContent> {
        let max_depth = self.options.max_depth;
        let tables = KeyedSearch::TABLE.collect(tree, max_depth)?;
        let body = lookup(tree, BODY_CONTENT).unwrap_or(&Value::Null);

        let (scope, image_count) = if self.options.first_table_only {
            let row = table_row(tables.first().copied(), FIRST_TABLE_ROW)?;
            let images = KeyedSearch::IMAGE.collect(body, max_depth)?.len();
            (row, images)
        } else {
            (body, collection_len(tree.get(INLINE_OBJECTS)))
        };
        trace!(first_table_only = self.options.first_table_only, "working subtree selected");

        let raw_content = extract::raw_content(scope, max_depth)?;
        let plain_text = tokenize::plain_text(&raw_content);
        let word_list = tokenize::words(&raw_content);
        let emoji_count = if self.options.count_emoji {
            emoji::count(&plain_text)
        } else {
            0
        };
        let urls = KeyedSearch::URL
            .collect(scope, max_depth)?
            .into_iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();

        let content = ExtractedContent::from_parts(Parts {
            raw_content,
            plain_text,
            word_list,
            image_count,
            emoji_count,
            urls,
            tables: tables.into_iter().cloned().collect(),
        });
        debug!(
            words = content.word_count(),
            characters = content.total_characters(),
            images = content.image_count(),
            emoji = content.emoji_count(),
            urls = content.urls().len(),
            tables = content.tables().len(),
            "document analyzed"
        );
        Ok(content)
    }
}

/// Shorthand for `Analyzer::new(*options).analyze(tree)`.
///
/// # Errors
/// See [`Analyzer::analyze`].
pub fn analyze(tree: &Value, options: &AnalyzerOptions) -> Result<ExtractedContent> {
    Analyzer::new(*options).analyze(tree)
}

fn table_row(table: Option<&Value>, index: usize) -> Result<&Value> {
    let table = table.ok_or(AnalyzeError::NoTable)?;
    let rows = table
        .get(TABLE_ROWS)
        .and_then(Value::as_array)
        .ok_or(AnalyzeError::MissingRows)?;
    rows.get(index).ok_or(AnalyzeError::RowOutOfRange {
        index,
        rows: rows.len(),
    })
}
