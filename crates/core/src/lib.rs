//! Text and metadata extraction for word-processor document trees.
//!
//! The input is an already-parsed JSON document (`serde_json::Value`); the
//! output is an immutable [`ExtractedContent`] with the document text, its
//! words, character totals, image and emoji counts, links and tables.
#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod collect;
pub mod content;
pub mod emoji;
pub mod error;
pub mod extract;
pub mod node;
pub mod options;
pub mod tokenize;

pub use analyzer::{Analyzer, analyze};
pub use content::ExtractedContent;
pub use error::{AnalyzeError, Result};
pub use node::DocumentTree;
pub use options::{AnalyzerOptions, AnalyzerOptionsBuilder};
