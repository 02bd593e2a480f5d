// crates/core/src/node.rs
use serde_json::{Map, Value};

use crate::error::{AnalyzeError, Result};

/// A parsed document: nested mappings, sequences and scalars.
pub type DocumentTree = Value;

/// Borrowed, tagged view of one position in a document tree.
///
/// Mapping is checked before sequence, and everything else is a scalar.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Scalar(&'a Value),
}

impl<'a> Node<'a> {
    #[must_use]
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::Sequence(items),
            other => Self::Scalar(other),
        }
    }

    /// Children in their natural order: mapping values or sequence elements.
    pub fn children(self) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        match self {
            Self::Mapping(map) => Box::new(map.values()),
            Self::Sequence(items) => Box::new(items.iter()),
            Self::Scalar(_) => Box::new(std::iter::empty()),
        }
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// Recursion budget carried down a walk.
#[derive(Debug, Clone, Copy)]
pub struct DepthGuard {
    limit: usize,
    depth: usize,
}

impl DepthGuard {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit, depth: 0 }
    }

    /// Guard for the next level down.
    ///
    /// # Errors
    /// Returns [`AnalyzeError::DepthExceeded`] once the limit is passed.
    pub fn descend(self) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.limit {
            return Err(AnalyzeError::DepthExceeded { limit: self.limit });
        }
        Ok(Self { depth, ..self })
    }
}

/// Length of a value treated as a collection: mapping entries, sequence
/// elements, zero for anything else.
#[must_use]
pub fn collection_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Object(map)) => map.len(),
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

/// Follows a chain of mapping keys, yielding `None` at the first miss.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.as_object()?.get(*key))
}
