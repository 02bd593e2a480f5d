// crates/core/src/error.rs
use thiserror::Error;

/// Failures raised while analyzing a document tree.
///
/// Absent or mistyped structure is never an error during ordinary traversal;
/// only the depth limit and the first-table lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("document nesting exceeds the maximum traversal depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("first-table mode requested but the document contains no table")]
    NoTable,

    #[error("first table has no `tableRows` sequence")]
    MissingRows,

    #[error("first table has {rows} row(s); row index {index} is out of range")]
    RowOutOfRange { index: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
