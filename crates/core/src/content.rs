// crates/core/src/content.rs
use serde::Serialize;
use serde_json::Value;

/// Everything derived from one document tree.
///
/// Built once by [`crate::Analyzer::analyze`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedContent {
    raw_content: String,
    plain_text: String,
    word_list: Vec<String>,
    word_count: usize,
    image_count: usize,
    emoji_count: usize,
    total_characters: usize,
    characters_without_spaces: usize,
    urls: Vec<String>,
    table_count: usize,
    #[serde(skip)]
    tables: Vec<Value>,
}

/// Inputs the aggregator has already computed.
#[derive(Debug, Default)]
pub(crate) struct Parts {
    pub raw_content: String,
    pub plain_text: String,
    pub word_list: Vec<String>,
    pub image_count: usize,
    pub emoji_count: usize,
    pub urls: Vec<String>,
    pub tables: Vec<Value>,
}

impl ExtractedContent {
    /// Derives the character totals. Every image and emoji occupies one
    /// extra character slot on top of the visible text.
    pub(crate) fn from_parts(parts: Parts) -> Self {
        let slots = parts.image_count + parts.emoji_count;
        let total_characters = parts.plain_text.chars().count() + slots;
        let characters_without_spaces =
            parts.plain_text.chars().filter(|&c| c != ' ').count() + slots;

        Self {
            word_count: parts.word_list.len(),
            table_count: parts.tables.len(),
            total_characters,
            characters_without_spaces,
            raw_content: parts.raw_content,
            plain_text: parts.plain_text,
            word_list: parts.word_list,
            image_count: parts.image_count,
            emoji_count: parts.emoji_count,
            urls: parts.urls,
            tables: parts.tables,
        }
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    #[must_use]
    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Zero when emoji counting was disabled.
    #[must_use]
    pub const fn emoji_count(&self) -> usize {
        self.emoji_count
    }

    #[must_use]
    pub const fn total_characters(&self) -> usize {
        self.total_characters
    }

    #[must_use]
    pub const fn characters_without_spaces(&self) -> usize {
        self.characters_without_spaces
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Every `table` mapping in the whole document, in traversal order.
    #[must_use]
    pub fn tables(&self) -> &[Value] {
        &self.tables
    }
}
